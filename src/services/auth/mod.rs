//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 발급과 Google OAuth 2.0 소셜 로그인을 담당하는
//! 서비스들을 제공합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - CSRF 방지 (서명된 OAuth state 매개변수)
//! - 토큰 만료 시간 관리

pub mod google_auth_service;
pub mod token_service;

pub use google_auth_service::*;
pub use token_service::*;
