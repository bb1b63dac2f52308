//! User Entity Implementation
//!
//! 애플리케이션 사용자 레코드와 요청 컨텍스트에서 사용되는
//! 인증된 사용자 뷰를 제공합니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::claims::TokenClaims;
use crate::domain::profile::GoogleProfile;

/// 애플리케이션 사용자 레코드
///
/// `UserStore`가 생성하거나 갱신하는 사용자 엔티티입니다.
/// 같은 `google_id`로 반복 로그인하면 항상 동일한 정체성으로 리졸브되며,
/// 이메일, 이름, 프로필 사진은 최신 프로필 값으로 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 애플리케이션 레벨 사용자 ID
    pub id: String,
    /// Google 사용자 고유 식별자 (매칭 기준)
    pub google_id: String,
    /// 사용자 이메일
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 프로필 사진 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// 프로필에서 직접 파생된 임시 사용자 생성
    ///
    /// 저장소 없이 동작하는 최소 구성과 저장소 장애 시의 폴백 경로에서
    /// 사용됩니다. `id`는 프로바이더의 프로필 ID를 그대로 사용합니다.
    pub fn from_profile(profile: &GoogleProfile) -> Self {
        let now = Utc::now();

        Self {
            id: profile.id.clone(),
            google_id: profile.id.clone(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            picture: profile.picture.clone(),
            created_at: now,
            updated_at: now,
            last_login_at: Some(now),
        }
    }

    /// 재로그인 시 갱신 가능한 속성을 최신 프로필 값으로 덮어씁니다.
    ///
    /// `id`와 `google_id`는 변경되지 않습니다.
    pub fn apply_profile(&mut self, profile: &GoogleProfile) {
        let now = Utc::now();

        self.email = profile.email.clone();
        self.name = profile.name.clone();
        self.picture = profile.picture.clone();
        self.updated_at = now;
        self.last_login_at = Some(now);
    }
}

/// 요청 컨텍스트에 담기는 인증된 사용자 뷰
///
/// 미들웨어가 검증된 JWT 클레임에서 복원하여 request extensions에
/// 저장합니다. 다운스트림 핸들러 관점에서는 읽기 전용이며
/// 요청 종료와 함께 소멸합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 애플리케이션 사용자 ID
    pub id: String,
    /// Google 사용자 고유 식별자
    pub google_id: String,
    /// 사용자 이메일
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 프로필 사진 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            google_id: user.google_id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            picture: user.picture.clone(),
        }
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.sub,
            google_id: claims.google_id,
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 extensions에 저장해 둔 사용자를 핸들러 인자로 꺼냅니다.
/// 미들웨어를 거치지 않은 라우트에서 사용하면 401이 반환됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}
