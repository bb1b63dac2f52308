//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는
//! 미들웨어들을 제공합니다. 횡단 관심사(Cross-cutting concerns)를
//! 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 검증 실패 시 핸들러 실행 전에 401 응답
//!
//! ### 2. 내부 에러 마스킹 (error_handler)
//! - 모든 500 응답 본문을 일반화된 JSON으로 교체
//! - 내부 에러 상세가 클라이언트에 노출되는 것을 차단
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::{internal_error_masker, AuthMiddleware};
//!
//! App::new()
//!     .wrap(internal_error_masker())
//!     .service(
//!         web::scope("/protected")
//!             .wrap(AuthMiddleware::new(token_service.clone()))
//!             .route("/profile", web::get().to(profile)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod error_handler;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use error_handler::internal_error_masker;
