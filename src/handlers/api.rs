//! 예제 API 핸들러
//!
//! 헬스체크와 인증이 필요한 예제 엔드포인트를 제공합니다.
//! 보호된 핸들러는 미들웨어가 요청 컨텍스트에 넣어 둔
//! [`AuthenticatedUser`]를 추출자로 받기만 하고 토큰을 직접
//! 검사하지 않습니다. 인증 검증의 단일 출처는 미들웨어입니다.

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::domain::AuthenticatedUser;

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 인증 여부와 무관하게 항상 같은 페이로드로 200을 반환합니다.
///
/// # Endpoint
/// `GET /health`
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

/// 인증된 사용자 프로필 조회
///
/// 인증 미들웨어로 감싼 리소스에 등록됩니다.
///
/// # Endpoint
/// `GET /profile` (인증 필요)
pub async fn profile(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "user": user
    }))
}

/// 대시보드 예제 엔드포인트
///
/// # Endpoint
/// `GET /dashboard` (인증 필요)
pub async fn dashboard(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Welcome back, {}!", user.name),
        "user": user
    }))
}
