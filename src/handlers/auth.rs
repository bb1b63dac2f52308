//! Authentication HTTP Handlers
//!
//! Google OAuth 2.0 플로우의 HTTP 엔드포인트를 처리하는 핸들러입니다.
//! 라우트는 설정 가능한 마운트 경로(기본 `/auth/google`) 아래에
//! 등록됩니다.
//!
//! # Endpoints
//!
//! - `GET {mount}/login` - Google 인증 페이지로 리디렉션
//! - `GET {mount}/callback` - 인증 완료 후 콜백 처리

use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::domain::OAuthCallbackQuery;
use crate::errors::AppError;
use crate::handlers::outcome;
use crate::services::auth::{GoogleAuthService, TokenService};

/// Google OAuth 로그인 시작 핸들러
///
/// CSRF state가 포함된 인증 URL을 만들어 브라우저를 Google 인증
/// 페이지로 리디렉션합니다.
///
/// # Endpoint
/// `GET {mount}/login`
#[get("/login")]
pub async fn google_login(
    google: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let login_url = google.build_login_url()?;

    Ok(HttpResponse::Found()
        .append_header(("Location", login_url))
        .finish())
}

/// Google OAuth 콜백 처리 핸들러
///
/// 인증 완료 후 리디렉션되는 콜백을 처리합니다. 토큰 교환과 사용자
/// 리졸브를 거쳐 JWT를 발급하고 성공 리디렉션을 반환합니다.
///
/// 어떤 실패도 에러 응답으로 전파되지 않습니다. 모든 실패 경로는
/// 실패 리디렉션으로 수렴하며 프로세스는 계속 동작합니다.
///
/// # Endpoint
/// `GET {mount}/callback?code={code}&state={state}`
#[get("/callback")]
pub async fn google_callback(
    query: web::Query<OAuthCallbackQuery>,
    google: web::Data<GoogleAuthService>,
    tokens: web::Data<TokenService>,
) -> HttpResponse {
    // 사용자가 거부했거나 프로바이더 측 에러
    if let Some(error) = &query.error {
        let detail = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        return outcome::on_error(&AppError::AuthenticationError(format!(
            "{}: {}",
            error, detail
        )));
    }

    // 유효성 검사
    if let Err(e) = query.validate() {
        return outcome::on_error(&AppError::ValidationError(e.to_string()));
    }

    // Google OAuth 인증 처리 (토큰 교환 + 프로필 조회 + 사용자 리졸브)
    let user = match google.authenticate_with_code(&query.code, &query.state).await {
        Ok(user) => user,
        Err(e) => return outcome::on_error(&e),
    };

    // JWT 발급 후 성공 리디렉션
    match tokens.issue(&user) {
        Ok(token) => outcome::on_success(&user, &token),
        Err(e) => outcome::on_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    use crate::config::AuthConfig;
    use crate::store::MemoryUserStore;

    fn test_app_data() -> (web::Data<GoogleAuthService>, web::Data<TokenService>) {
        let config = Arc::new(
            AuthConfig::from_lookup(|key| match key {
                "GOOGLE_CLIENT_ID" => Some("test-client-id".to_string()),
                "GOOGLE_CLIENT_SECRET" => Some("test-client-secret".to_string()),
                "JWT_SECRET" => Some("handler-test-secret".to_string()),
                _ => None,
            })
            .unwrap(),
        );
        let google = GoogleAuthService::new(config.clone(), Arc::new(MemoryUserStore::new()));
        let tokens = TokenService::new(config);

        (web::Data::new(google), web::Data::new(tokens))
    }

    #[actix_web::test]
    async fn test_login_redirects_to_google() {
        let (google, tokens) = test_app_data();
        let app = test::init_service(
            App::new()
                .app_data(google)
                .app_data(tokens)
                .service(web::scope("/auth/google").service(google_login)),
        )
        .await;

        let req = test::TestRequest::get().uri("/auth/google/login").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);

        let location = res
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(location.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(location.contains("client_id=test-client-id"));
        assert!(location.contains("state="));
    }

    #[actix_web::test]
    async fn test_callback_with_provider_error_redirects_to_login() {
        let (google, tokens) = test_app_data();
        let app = test::init_service(
            App::new()
                .app_data(google)
                .app_data(tokens)
                .service(web::scope("/auth/google").service(google_callback)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?error=access_denied")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get("Location").unwrap(),
            "/login.html?error=auth_failed"
        );
    }

    #[actix_web::test]
    async fn test_callback_with_missing_code_redirects_to_login() {
        let (google, tokens) = test_app_data();
        let app = test::init_service(
            App::new()
                .app_data(google)
                .app_data(tokens)
                .service(web::scope("/auth/google").service(google_callback)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?state=abc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get("Location").unwrap(),
            "/login.html?error=auth_failed"
        );
    }

    #[actix_web::test]
    async fn test_callback_with_invalid_state_redirects_to_login() {
        let (google, tokens) = test_app_data();
        let app = test::init_service(
            App::new()
                .app_data(google)
                .app_data(tokens)
                .service(web::scope("/auth/google").service(google_callback)),
        )
        .await;

        // state 검증은 토큰 교환보다 먼저 수행되므로 외부 호출 없이 실패함
        let req = test::TestRequest::get()
            .uri("/auth/google/callback?code=some-code&state=forged")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get("Location").unwrap(),
            "/login.html?error=auth_failed"
        );
    }
}
