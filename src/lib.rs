//! Google OAuth 게이트웨이
//!
//! Google OAuth 2.0 소셜 로그인을 웹 애플리케이션에 연결하는
//! 통합 게이트웨이입니다. 환경 변수 기반 설정, 인증 라우트 등록,
//! 보호된 예제 엔드포인트, 정적 데모 페이지 서빙을 제공합니다.
//!
//! # Features
//!
//! - **Google OAuth 2.0**: Authorization Code Grant 플로우 전체 처리
//! - **JWT 토큰**: 사용자 스냅샷을 담은 상태 없는 인증 토큰 발급/검증
//! - **플러그형 사용자 저장소**: 인메모리 기본, MongoDB 선택
//! - **명시적 부트스트랩**: 설정 → 저장소 → 서비스 → 라우트 → 리스너
//! - **에러 격리**: 인증 실패는 리디렉션으로, 내부 에러는 일반화된 500으로
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/google/*, /health, /profile, /dashboard, 페이지
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 인증 결과 리디렉션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth 플로우, JWT 발급/검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   User Store    │ ← 프로필 → 사용자 리졸브 (Memory / MongoDB)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use google_auth_gateway::{bootstrap, routes};
//! use actix_web::{App, HttpServer};
//!
//! let components = bootstrap::build().await?;
//!
//! HttpServer::new(move || {
//!     App::new().configure(|cfg| routes::configure_all_routes(cfg, &components))
//! })
//! .bind(components.server_config.bind_address())?
//! .run()
//! .await
//! ```

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;
