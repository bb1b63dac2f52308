//! 인증 결과 응답 생성
//!
//! 인증 플로우의 최종 응답을 만드는 두 함수입니다. 둘 다 실패하지
//! 않으며(panic 없음, `Err` 없음) HTTP 응답 생성 외의 부수 효과는
//! 로그 기록뿐입니다.

use actix_web::HttpResponse;

use crate::domain::User;
use crate::errors::AppError;

/// 인증 실패 시 리디렉션 대상
const FAILURE_REDIRECT: &str = "/login.html?error=auth_failed";

/// 인증 성공 응답
///
/// 발급된 토큰을 쿼리 파라미터로 실어 로그인 후 페이지로
/// 리디렉션합니다.
///
/// 토큰을 URL 쿼리로 전달하는 방식은 브라우저 히스토리와 Referer
/// 헤더에 토큰이 남습니다. 로컬 데모 배포에서만 사용하세요.
pub fn on_success(user: &User, token: &str) -> HttpResponse {
    log::info!("✅ 로그인 성공: {} ({})", user.name, user.email);

    HttpResponse::Found()
        .append_header(("Location", format!("/dashboard.html?token={}", token)))
        .finish()
}

/// 인증 실패 응답
///
/// 원인은 서버 로그에만 남기고, 클라이언트에는 일반화된 에러 플래그가
/// 붙은 로그인 페이지 리디렉션만 전달합니다.
pub fn on_error(error: &AppError) -> HttpResponse {
    log::error!("❌ 인증 실패: {}", error);

    HttpResponse::Found()
        .append_header(("Location", FAILURE_REDIRECT))
        .finish()
}
