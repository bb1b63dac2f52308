//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 Authorization Code Grant 플로우를 통한
//! 소셜 로그인 기능을 제공합니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! 브라우저                      게이트웨이                     Google OAuth
//!    │                             │                              │
//!    │ 1. GET /auth/google/login   │                              │
//!    ├────────────────────────────►│                              │
//!    │ 2. 302 (state 포함 인증 URL) │                              │
//!    │◄────────────────────────────┤                              │
//!    │ 3. 사용자 인증               │                              │
//!    ├────────────────────────────────────────────────────────────►│
//!    │ 4. 302 /callback?code&state │                              │
//!    │◄────────────────────────────────────────────────────────────┤
//!    │ 5. GET /auth/google/callback│                              │
//!    ├────────────────────────────►│ 6. state 검증                 │
//!    │                             │ 7. code → access token 교환   │
//!    │                             ├─────────────────────────────►│
//!    │                             │ 8. 프로필 조회                │
//!    │                             ├─────────────────────────────►│
//!    │                             │ 9. UserStore 리졸브           │
//!    │ 10. 302 (JWT 포함 리디렉션)  │                              │
//!    │◄────────────────────────────┤                              │
//! ```
//!
//! ## 보안 특징
//!
//! - **CSRF 방지**: state 파라미터는 `timestamp.sha256(timestamp:secret)`
//!   형태로 서명되며, 콜백에서 서명 재계산과 만료 시간 검증을 거칩니다.
//! - **Client Secret 보호**: 토큰 교환은 서버 사이드에서만 수행됩니다.
//! - **저장소 장애 격리**: 사용자 리졸브 실패는 프로필 파생 임시 사용자로
//!   폴백되어 로그인 자체를 막지 않습니다.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::config::AuthConfig;
use crate::domain::{GoogleProfile, GoogleTokenResponse, User};
use crate::errors::{AppError, ErrorContext};
use crate::store::UserStore;

/// Google OAuth 2.0 인증 서비스
///
/// 로그인 URL 생성, 콜백 처리(토큰 교환과 프로필 조회), 사용자 리졸브까지
/// OAuth 플로우 전체를 담당합니다. 설정과 사용자 저장소는 생성 시점에
/// 주입되며, HTTP 클라이언트는 한 번 생성되어 재사용됩니다.
pub struct GoogleAuthService {
    config: Arc<AuthConfig>,
    http: reqwest::Client,
    store: Arc<dyn UserStore>,
}

impl GoogleAuthService {
    /// 주어진 설정과 사용자 저장소로 인증 서비스를 생성합니다.
    pub fn new(config: Arc<AuthConfig>, store: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            store,
        }
    }

    /// 사용 중인 저장소 백엔드 이름을 반환합니다. 시작 배너에 사용됩니다.
    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Google OAuth 로그인 URL 생성
    ///
    /// 사용자를 Google 인증 페이지로 리다이렉트하기 위한 Authorization URL을
    /// 생성합니다. CSRF 방지용 state 파라미터가 포함됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - state 생성 실패
    pub fn build_login_url(&self) -> Result<String, AppError> {
        let state = self.generate_oauth_state()?;

        let params = [
            ("client_id", self.config.google.client_id.clone()),
            ("redirect_uri", self.config.google.callback_url.clone()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", self.config.google.auth_uri, query_string))
    }

    /// Authorization Code를 사용하여 사용자 인증 및 리졸브
    ///
    /// 콜백에서 받은 Authorization Code를 처리하여 인증을 완료하고
    /// 애플리케이션 사용자를 반환합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. state 파라미터 검증 (서명과 만료 시간)
    /// 2. Authorization Code를 Access Token으로 교환
    /// 3. Access Token으로 Google 프로필 조회
    /// 4. 저장소를 통한 사용자 리졸브 (실패 시 임시 사용자 폴백)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ExternalServiceError` - Google API 통신 오류
    pub async fn authenticate_with_code(&self, auth_code: &str, state: &str) -> Result<User, AppError> {
        self.verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let profile = self.fetch_profile(&token_response.access_token).await?;

        log::info!("Google 인증 성공: {}", profile.email);

        Ok(self.resolve_user(&profile).await)
    }

    /// 프로필을 애플리케이션 사용자로 리졸브합니다.
    ///
    /// 저장소 실패는 로그인 실패로 이어지지 않습니다. 프로필에서 직접
    /// 파생한 임시 사용자로 폴백하고 경고만 남깁니다.
    async fn resolve_user(&self, profile: &GoogleProfile) -> User {
        match self.store.resolve(profile).await {
            Ok(user) => user,
            Err(e) => {
                log::warn!(
                    "사용자 저장소({}) 리졸브 실패, 임시 사용자로 폴백: {}",
                    self.store.backend_name(),
                    e
                );
                User::from_profile(profile)
            }
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST {token_uri}
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=...&client_id=...&client_secret=...&redirect_uri=...&grant_type=authorization_code
    /// ```
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", auth_code),
            ("client_id", &self.config.google.client_id),
            ("client_secret", &self.config.google.client_secret),
            ("redirect_uri", &self.config.google.callback_url),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.config.google.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 프로필 조회
    async fn fetch_profile(&self, access_token: &str) -> Result<GoogleProfile, AppError> {
        let response = self
            .http
            .get(&self.config.google.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleProfile>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e))
            })
    }

    /// OAuth State 매개변수 생성
    ///
    /// `{timestamp}.{sha256(timestamp:secret)}` 형태의 자체 검증 가능한
    /// 값을 생성합니다. 별도 저장소 없이 서명 재계산만으로 검증됩니다.
    fn generate_oauth_state(&self) -> Result<String, AppError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("시간 계산 실패")?
            .as_secs();

        Ok(format!("{}.{}", timestamp, self.sign_state(timestamp)))
    }

    /// 타임스탬프에 대한 state 서명을 계산합니다.
    fn sign_state(&self, timestamp: u64) -> String {
        let data = format!("{}:{}", timestamp, self.config.state_secret);
        hex::encode(Sha256::digest(data.as_bytes()))
    }

    /// OAuth State 매개변수 검증
    ///
    /// 콜백에서 받은 state의 형식, 서명, 만료 시간을 확인하여
    /// CSRF 공격을 방지합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 형식 오류, 서명 불일치, 만료
    fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        let (timestamp_raw, signature) = state.split_once('.').ok_or_else(|| {
            AppError::AuthenticationError("유효하지 않은 OAuth state 형식입니다".to_string())
        })?;

        let timestamp: u64 = timestamp_raw.parse().map_err(|_| {
            AppError::AuthenticationError("유효하지 않은 OAuth state 형식입니다".to_string())
        })?;

        if self.sign_state(timestamp) != signature {
            return Err(AppError::AuthenticationError(
                "OAuth state 서명이 일치하지 않습니다".to_string(),
            ));
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("시간 계산 실패")?
            .as_secs();

        // 미래 타임스탬프는 시계 오차 60초까지만 허용
        if timestamp > now + 60 {
            return Err(AppError::AuthenticationError(
                "OAuth state 타임스탬프가 올바르지 않습니다".to_string(),
            ));
        }

        if now.saturating_sub(timestamp) > self.config.state_ttl_secs as u64 {
            return Err(AppError::AuthenticationError(
                "OAuth state가 만료되었습니다".to_string(),
            ));
        }

        Ok(())
    }
}
