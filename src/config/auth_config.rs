//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 프로바이더와 JWT 토큰 발급에 필요한 설정을 관리합니다.
//! 모든 값은 시작 시점에 환경 변수에서 읽어 불변 구조체로 고정되며,
//! 인증 컴포넌트에는 `Arc<AuthConfig>`로 전달됩니다.
//!
//! ## Google Cloud Console 설정 가이드
//!
//! 1. [Google Cloud Console](https://console.cloud.google.com/) 접속
//! 2. APIs & Services > Credentials에서 OAuth 2.0 Client ID 생성
//! 3. 승인된 리디렉션 URI에 콜백 URL 등록:
//!    `http://localhost:3000/auth/google/callback`
//!
//! ## 보안 고려사항
//!
//! - `client_secret`과 `jwt_secret`은 로그에 출력하지 마세요
//! - 프로덕션에서는 HTTPS 콜백 URI만 사용하세요
//! - JWT 비밀키는 최소 256비트 랜덤 키를 권장합니다 (`openssl rand -base64 32`)

use std::env;

use crate::errors::AppError;

/// 콜백 URL 기본값. 기본 마운트 경로와 기본 포트에 맞춰져 있습니다.
pub const DEFAULT_CALLBACK_URL: &str = "http://localhost:3000/auth/google/callback";

/// JWT 토큰 수명 기본값 (일 단위).
pub const DEFAULT_JWT_EXPIRATION_DAYS: i64 = 7;

/// OAuth state 파라미터 유효 시간 기본값 (초 단위).
pub const DEFAULT_STATE_TTL_SECS: i64 = 600;

/// Google OAuth 2.0 프로바이더 설정
///
/// Google Cloud Console에서 발급받은 클라이언트 자격 증명과
/// OAuth 플로우에 사용되는 엔드포인트 주소를 담습니다.
/// 엔드포인트 주소는 테스트에서 로컬 목 서버로 바꿀 수 있도록 설정값으로 노출됩니다.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    /// OAuth 2.0 Client ID. 클라이언트 사이드에 노출되어도 안전한 값입니다.
    pub client_id: String,
    /// OAuth 2.0 Client Secret. 서버 사이드 전용, 토큰 교환 시에만 사용됩니다.
    pub client_secret: String,
    /// 인증 완료 후 Google이 리디렉션할 콜백 URL
    pub callback_url: String,
    /// Google 인증 페이지 엔드포인트
    pub auth_uri: String,
    /// Authorization Code를 Access Token으로 교환하는 엔드포인트
    pub token_uri: String,
    /// 사용자 프로필 조회 엔드포인트
    pub userinfo_uri: String,
}

/// JSON Web Token 설정
///
/// 로그인 성공 시 발급하는 HS256 서명 토큰의 비밀키와 수명을 관리합니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 토큰 수명 (일 단위)
    pub expiration_days: i64,
}

/// 인증 계층 전체 설정
///
/// 프로세스당 한 번 생성되는 불변 값입니다. Google OAuth 자격 증명,
/// JWT 설정, CSRF state 서명 설정을 포함합니다.
///
/// # 생성 방법
///
/// ```rust,ignore
/// // 프로세스 환경 변수에서
/// let config = AuthConfig::from_env()?;
///
/// // 테스트에서 임의 매핑으로
/// let config = AuthConfig::from_lookup(|key| match key {
///     "GOOGLE_CLIENT_ID" => Some("test-client".to_string()),
///     "GOOGLE_CLIENT_SECRET" => Some("test-secret".to_string()),
///     "JWT_SECRET" => Some("test-jwt".to_string()),
///     _ => None,
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Google OAuth 프로바이더 설정
    pub google: GoogleOAuthConfig,
    /// JWT 토큰 설정
    pub jwt: JwtConfig,
    /// OAuth state 서명용 비밀키. 미설정 시 JWT 비밀키를 재사용합니다.
    pub state_secret: String,
    /// state 파라미터 만료 시간 (초 단위)
    pub state_ttl_secs: i64,
}

impl AuthConfig {
    /// 프로세스 환경 변수에서 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 필수 환경 변수 누락
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 환경 변수 이름과 값의 매핑에서 설정을 구성합니다.
    ///
    /// 필수값 `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `JWT_SECRET`은
    /// 누락 시 즉시 에러를 반환합니다. 나머지는 기본값으로 대체됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 필수값 누락. 누락된 변수 이름을 포함합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = required(&lookup, "GOOGLE_CLIENT_ID")?;
        let client_secret = required(&lookup, "GOOGLE_CLIENT_SECRET")?;
        let jwt_secret = required(&lookup, "JWT_SECRET")?;

        let callback_url = lookup("CALLBACK_URL")
            .unwrap_or_else(|| DEFAULT_CALLBACK_URL.to_string());

        let expiration_days = parse_or_default(
            lookup("JWT_EXPIRATION_DAYS"),
            "JWT_EXPIRATION_DAYS",
            DEFAULT_JWT_EXPIRATION_DAYS,
        );

        let state_secret = lookup("OAUTH_STATE_SECRET")
            .unwrap_or_else(|| jwt_secret.clone());

        let state_ttl_secs = parse_or_default(
            lookup("OAUTH_STATE_TTL_SECS"),
            "OAUTH_STATE_TTL_SECS",
            DEFAULT_STATE_TTL_SECS,
        );

        Ok(Self {
            google: GoogleOAuthConfig {
                client_id,
                client_secret,
                callback_url,
                auth_uri: lookup("GOOGLE_AUTH_URI")
                    .unwrap_or_else(|| "https://accounts.google.com/o/oauth2/auth".to_string()),
                token_uri: lookup("GOOGLE_TOKEN_URI")
                    .unwrap_or_else(|| "https://oauth2.googleapis.com/token".to_string()),
                userinfo_uri: lookup("GOOGLE_USERINFO_URI")
                    .unwrap_or_else(|| "https://www.googleapis.com/oauth2/v2/userinfo".to_string()),
            },
            jwt: JwtConfig {
                secret: jwt_secret,
                expiration_days,
            },
            state_secret,
            state_ttl_secs,
        })
    }
}

/// 필수 환경 변수를 조회합니다. 없거나 빈 문자열이면 설정 에러입니다.
fn required<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigurationError(format!("{} must be set", name))),
    }
}

/// 숫자 설정값을 파싱합니다. 파싱 실패 시 경고 후 기본값을 사용합니다.
fn parse_or_default(raw: Option<String>, name: &str, default: i64) -> i64 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("GOOGLE_CLIENT_ID", "test-client-id"),
            ("GOOGLE_CLIENT_SECRET", "test-client-secret"),
            ("JWT_SECRET", "test-jwt-secret"),
        ])
    }

    fn lookup_of(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_required_fields_present() {
        let config = AuthConfig::from_lookup(lookup_of(base_vars())).unwrap();

        assert_eq!(config.google.client_id, "test-client-id");
        assert_eq!(config.google.client_secret, "test-client-secret");
        assert_eq!(config.jwt.secret, "test-jwt-secret");
    }

    #[test]
    fn test_missing_required_field_fails() {
        for missing in ["GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET", "JWT_SECRET"] {
            let mut vars = base_vars();
            vars.remove(missing);

            let err = AuthConfig::from_lookup(lookup_of(vars)).unwrap_err();
            match err {
                AppError::ConfigurationError(msg) => assert!(msg.contains(missing)),
                other => panic!("Expected ConfigurationError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_required_field_fails() {
        let mut vars = base_vars();
        vars.insert("JWT_SECRET", "   ");

        assert!(AuthConfig::from_lookup(lookup_of(vars)).is_err());
    }

    #[test]
    fn test_optional_defaults() {
        let config = AuthConfig::from_lookup(lookup_of(base_vars())).unwrap();

        assert_eq!(config.google.callback_url, DEFAULT_CALLBACK_URL);
        assert_eq!(config.jwt.expiration_days, DEFAULT_JWT_EXPIRATION_DAYS);
        assert_eq!(config.state_ttl_secs, DEFAULT_STATE_TTL_SECS);
        // state 비밀키는 JWT 비밀키로 대체됨
        assert_eq!(config.state_secret, "test-jwt-secret");
        assert!(config.google.auth_uri.starts_with("https://accounts.google.com"));
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = base_vars();
        vars.insert("CALLBACK_URL", "https://example.com/cb");
        vars.insert("JWT_EXPIRATION_DAYS", "30");
        vars.insert("OAUTH_STATE_SECRET", "separate-state-secret");

        let config = AuthConfig::from_lookup(lookup_of(vars)).unwrap();

        assert_eq!(config.google.callback_url, "https://example.com/cb");
        assert_eq!(config.jwt.expiration_days, 30);
        assert_eq!(config.state_secret, "separate-state-secret");
    }

    #[test]
    fn test_invalid_number_falls_back() {
        let mut vars = base_vars();
        vars.insert("JWT_EXPIRATION_DAYS", "not-a-number");

        let config = AuthConfig::from_lookup(lookup_of(vars)).unwrap();
        assert_eq!(config.jwt.expiration_days, DEFAULT_JWT_EXPIRATION_DAYS);
    }
}
