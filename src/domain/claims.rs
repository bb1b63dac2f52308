//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 정의합니다.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 리졸브된 사용자의 스냅샷을 그대로 담습니다. 보호된 핸들러가
/// 저장소 조회 없이 요청 컨텍스트 사용자를 복원할 수 있게 하려는
/// 구성으로, 영속성 없는 최소 구성에서도 보호 라우트가 동작합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (애플리케이션 사용자 ID)
/// - `google_id`: Google 사용자 고유 식별자
/// - `email`, `name`, `picture`: 사용자 스냅샷
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// Google 사용자 고유 식별자
    pub google_id: String,
    /// 사용자 이메일
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 프로필 사진 URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub picture: Option<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 사용자 스냅샷과 발급/만료 시각으로 클레임을 구성합니다.
    pub fn for_user(user: &User, iat: i64, exp: i64) -> Self {
        Self {
            sub: user.id.clone(),
            google_id: user.google_id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            picture: user.picture.clone(),
            iat,
            exp,
        }
    }
}
