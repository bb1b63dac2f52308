//! 내부 에러 마스킹 미들웨어
//!
//! 요청 처리 중 발생한 모든 500 응답의 본문을 일반화된 JSON으로
//! 교체합니다. `AppError`를 거치지 않은 에러(핸들러의 임의 에러,
//! 프레임워크 내부 에러)도 이 지점에서 걸러지므로 내부 상세가
//! 클라이언트로 새어 나가는 경로가 없습니다.

use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderValue, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};

/// 일반화된 500 응답 본문
const INTERNAL_ERROR_BODY: &str = r#"{"success":false,"error":"Internal server error"}"#;

/// 500 응답 본문을 일반화하는 `ErrorHandlers` 미들웨어를 생성합니다.
pub fn internal_error_masker<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, mask_internal_error)
}

/// 원래 응답 본문을 버리고 일반화된 JSON 본문으로 교체합니다.
fn mask_internal_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, res) = res.into_parts();
    let mut res = res.set_body(INTERNAL_ERROR_BODY.to_string());

    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{error, test, web, App, HttpResponse};

    async fn leaky_handler() -> actix_web::Result<HttpResponse> {
        // 내부 상세를 담은 에러. 클라이언트에 그대로 전달되면 안 됨
        Err(error::ErrorInternalServerError(
            "db password=hunter2 connection refused",
        ))
    }

    async fn healthy_handler() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
    }

    #[actix_web::test]
    async fn test_internal_error_body_is_masked() {
        let app = test::init_service(
            App::new()
                .wrap(internal_error_masker())
                .route("/boom", web::get().to(leaky_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/boom").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = test::read_body(res).await;
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("hunter2"));
    }

    #[actix_web::test]
    async fn test_successful_response_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(internal_error_masker())
                .route("/ok", web::get().to(healthy_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/ok").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["ok"], true);
    }
}
