//! OAuth 플로우의 요청/응답 전송 객체
//!
//! Google OAuth 2.0 Authorization Code Grant 플로우에서 주고받는
//! 데이터 형태를 정의합니다.

use serde::Deserialize;
use validator::Validate;

/// Google OAuth 콜백 쿼리 파라미터
///
/// `GET /auth/google/callback?code=...&state=...` 요청의 쿼리를 표현합니다.
/// 사용자가 인증을 거부했거나 프로바이더 측에서 실패한 경우
/// `code` 대신 `error`가 전달됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    /// Google이 발급한 일회용 Authorization Code
    #[serde(default)]
    #[validate(length(min = 1, message = "authorization code is required"))]
    pub code: String,

    /// CSRF 방지용 state 파라미터
    #[serde(default)]
    #[validate(length(min = 1, message = "state parameter is required"))]
    pub state: String,

    /// 프로바이더가 전달한 에러 코드 (예: access_denied)
    pub error: Option<String>,

    /// 프로바이더가 전달한 에러 상세 설명
    pub error_description: Option<String>,
}

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 Access Token으로 교환할 때 Google이 반환하는
/// 데이터입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    #[serde(default)]
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: i64,
    /// 리프레시 토큰 (선택사항)
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    #[serde(default)]
    pub scope: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_valid() {
        let query = OAuthCallbackQuery {
            code: "4/0AX4XfWh".to_string(),
            state: "abc123".to_string(),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_callback_query_missing_code() {
        let query = OAuthCallbackQuery {
            code: String::new(),
            state: "abc123".to_string(),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn test_token_response_deserialize() {
        let json = r#"{
            "access_token": "ya29.a0AfH6SMC",
            "expires_in": 3599,
            "scope": "openid email profile",
            "token_type": "Bearer"
        }"#;

        let response: GoogleTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.access_token, "ya29.a0AfH6SMC");
        assert_eq!(response.token_type, "Bearer");
        assert!(response.refresh_token.is_none());
    }
}
