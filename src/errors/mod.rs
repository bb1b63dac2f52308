//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 게이트웨이를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! 1. **시작 설정 에러**: 치명적. 서버가 리스닝 상태에 도달하지 못합니다.
//! 2. **인증 실패**: 콜백 경로에서는 실패 리디렉션으로, API 경로에서는 401로 처리됩니다.
//! 3. **저장소 실패**: 사용자 리졸브 과정에서는 임시 사용자로 폴백되어 복구됩니다.
//! 4. **처리되지 않은 에러**: 원인은 서버 로그에만 남기고
//!    클라이언트에는 일반화된 500 응답만 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn fetch_profile(token: &str) -> Result<GoogleProfile, AppError> {
//!     if token.is_empty() {
//!         return Err(AppError::AuthenticationError("missing access token".to_string()));
//!     }
//!     // ...
//!     Ok(profile)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 게이트웨이에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되며, 5xx 계열의 원인 메시지는
/// 클라이언트에 노출되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 시작 설정 에러 (프로세스 시작 실패)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출해도 안전한 메시지를 반환합니다.
    ///
    /// 내부 원인 문자열은 포함하지 않습니다. 5xx 계열은 항상
    /// `"Internal server error"`로 일반화됩니다.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "Invalid request",
            AppError::NotFound(_) => "Not found",
            AppError::AuthenticationError(_) => "Authentication required",
            _ => "Internal server error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와
    /// `{"success":false,"error":...}` 형태의 JSON 응답으로 변환합니다.
    /// 원인 메시지는 서버 로그에만 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("💥 서버 에러: {}", self);
        } else {
            log::warn!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "success": false,
                "error": self.client_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("code is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("page not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let errors = [
            AppError::ConfigurationError("JWT_SECRET must be set".to_string()),
            AppError::DatabaseError("connection refused".to_string()),
            AppError::ExternalServiceError("token exchange failed".to_string()),
            AppError::InternalError("something went wrong".to_string()),
        ];

        for error in errors {
            let response = error.error_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_server_error_body_masks_cause() {
        // 내부 원인 문자열이 클라이언트 메시지에 새어 나가지 않아야 함
        let error = AppError::DatabaseError("password=hunter2 connection refused".to_string());

        assert_eq!(error.client_message(), "Internal server error");
        assert!(!error.client_message().contains("hunter2"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
