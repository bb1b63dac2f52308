//! 서버 바인딩 및 정적 파일 설정 관리 모듈

use std::env;
use std::path::PathBuf;

/// 서버 포트 기본값
pub const DEFAULT_PORT: u16 = 3000;

/// 인증 라우트 마운트 경로 기본값
pub const DEFAULT_AUTH_MOUNT_PATH: &str = "/auth/google";

/// HTTP 서버 설정
///
/// 리스너 바인딩 주소, 정적 HTML 페이지 루트, 인증 라우트가 마운트될
/// 경로 접두사를 담는 불변 설정입니다.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소
    pub host: String,
    /// 바인딩할 포트
    pub port: u16,
    /// 정적 HTML 페이지가 위치한 디렉터리
    pub static_root: PathBuf,
    /// 인증 라우트 마운트 경로. 애플리케이션 라우트와 겹치지 않아야 합니다.
    pub auth_mount_path: String,
}

impl ServerConfig {
    /// 프로세스 환경 변수에서 서버 설정을 구성합니다.
    ///
    /// 모든 항목이 선택값이므로 실패하지 않습니다.
    ///
    /// # Environment Variables
    ///
    /// * `HOST` - 바인딩 주소 (기본값: "127.0.0.1")
    /// * `PORT` - 바인딩 포트 (기본값: 3000)
    /// * `STATIC_ROOT` - 정적 파일 루트 (기본값: "./public")
    /// * `AUTH_MOUNT_PATH` - 인증 라우트 접두사 (기본값: "/auth/google")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 환경 변수 이름과 값의 매핑에서 서버 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = lookup("PORT")
            .and_then(|raw| {
                raw.parse::<u16>()
                    .map_err(|e| log::warn!("PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_PORT))
                    .ok()
            })
            .unwrap_or(DEFAULT_PORT);

        let static_root = lookup("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./public"));

        let auth_mount_path = lookup("AUTH_MOUNT_PATH")
            .unwrap_or_else(|| DEFAULT_AUTH_MOUNT_PATH.to_string());

        Self {
            host,
            port,
            static_root,
            auth_mount_path,
        }
    }

    /// `host:port` 형식의 바인딩 주소를 반환합니다.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
