//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: Google OAuth 플로우 엔드포인트
//!   - 로그인 시작 (`GET {mount}/login`)
//!   - OAuth 콜백 (`GET {mount}/callback`)
//! - **`api`**: 예제 API 엔드포인트
//!   - 헬스체크 (`GET /health`)
//!   - 보호된 프로필/대시보드 (`GET /profile`, `GET /dashboard`)
//! - **`pages`**: 정적 HTML 페이지 핸들러 (`/`, `/login`, `/signup`)
//! - **`outcome`**: 인증 성공/실패 최종 응답 (리디렉션) 생성
//!
//! ## 에러 처리
//!
//! API 핸들러는 `Result<HttpResponse, AppError>`를 반환하고 `?` 연산자로
//! 에러를 전파합니다. 콜백 핸들러만 예외적으로 모든 실패를 `outcome`의
//! 실패 리디렉션으로 변환하므로 인증 실패가 에러 응답으로 새지 않습니다.

pub mod api;
pub mod auth;
pub mod outcome;
pub mod pages;
