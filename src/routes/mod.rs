//! API 라우트 설정 모듈
//!
//! 게이트웨이의 모든 HTTP 엔드포인트를 등록합니다.
//! 등록 순서가 곧 매칭 우선순위이므로 다음 순서를 유지합니다:
//!
//! 1. 헬스체크 (`/health`)
//! 2. 인증 라우트 (설정된 마운트 경로, 기본 `/auth/google`)
//! 3. 보호된 API (`/profile`, `/dashboard` - 인증 미들웨어로 감쌈)
//! 4. 페이지 라우트 (`/`, `/login`, `/signup`)
//! 5. 정적 파일 서비스 (나머지 경로 전체의 폴백)
//!
//! 보호된 `/dashboard` API가 정적 서비스보다 먼저 등록되므로
//! 토큰 없는 `GET /dashboard`는 401로 거부됩니다. 대시보드 페이지
//! 자체는 성공 리디렉션이 가리키는 `/dashboard.html`로 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let components = bootstrap::build().await?;
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &components));
//! ```

use actix_files::Files;
use actix_web::web;

use crate::bootstrap::AppComponents;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 조립이 끝난 컴포넌트를 app data로 주입하고 기능별 라우트 그룹을
/// 순서대로 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, components: &AppComponents) {
    // 핸들러가 추출하는 공유 컴포넌트
    cfg.app_data(web::Data::from(components.google.clone()))
        .app_data(web::Data::from(components.tokens.clone()))
        .app_data(web::Data::from(components.server_config.clone()));

    // Health check endpoint
    cfg.service(handlers::api::health_check);

    configure_auth_routes(cfg, components);
    configure_protected_routes(cfg, components);
    configure_page_routes(cfg, components);
}

/// 인증 라우트를 설정합니다
///
/// OAuth 플로우 라우트 쌍을 설정된 마운트 경로 아래에 등록합니다.
/// 마운트 경로는 애플리케이션 라우트와 겹치지 않아야 합니다.
///
/// # Available Routes
///
/// - `GET {mount}/login` - Google 인증 페이지로 리디렉션
/// - `GET {mount}/callback` - OAuth 콜백 처리
fn configure_auth_routes(cfg: &mut web::ServiceConfig, components: &AppComponents) {
    cfg.service(
        web::scope(&components.server_config.auth_mount_path)
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_callback),
    );
}

/// 보호된 예제 라우트를 설정합니다
///
/// 각 리소스를 인증 미들웨어로 감쌉니다. 미들웨어가 거부한 요청은
/// 핸들러에 도달하지 않습니다.
///
/// # Available Routes
///
/// - `GET /profile` - 인증된 사용자 정보 (Bearer 토큰 필요)
/// - `GET /dashboard` - 대시보드 데이터 (Bearer 토큰 필요)
fn configure_protected_routes(cfg: &mut web::ServiceConfig, components: &AppComponents) {
    cfg.service(
        web::resource("/profile")
            .wrap(AuthMiddleware::new(components.tokens.clone()))
            .route(web::get().to(handlers::api::profile)),
    );
    cfg.service(
        web::resource("/dashboard")
            .wrap(AuthMiddleware::new(components.tokens.clone()))
            .route(web::get().to(handlers::api::dashboard)),
    );
}

/// 페이지 라우트와 정적 파일 서비스를 설정합니다
///
/// 정적 파일 서비스는 마지막에 등록되어 앞선 라우트가 처리하지 않은
/// 경로(`/dashboard.html`, `/login.html` 등)의 폴백으로 동작합니다.
fn configure_page_routes(cfg: &mut web::ServiceConfig, components: &AppComponents) {
    cfg.service(handlers::pages::index)
        .service(handlers::pages::login_page)
        .service(handlers::pages::signup_page)
        .service(Files::new("/", &components.server_config.static_root));
}
