//! 정적 HTML 페이지 핸들러
//!
//! 설정된 정적 루트에서 데모 페이지를 서빙합니다. 나머지 정적 자산은
//! 라우트 등록 마지막에 마운트되는 `actix_files::Files` 서비스가
//! 담당합니다.

use std::path::Path;

use actix_files::NamedFile;
use actix_web::{get, web};

use crate::config::ServerConfig;
use crate::errors::AppError;

/// 정적 루트에서 페이지 파일을 엽니다.
async fn open_page(static_root: &Path, file_name: &str) -> Result<NamedFile, AppError> {
    NamedFile::open_async(static_root.join(file_name))
        .await
        .map_err(|e| AppError::NotFound(format!("{} 페이지 로드 실패: {}", file_name, e)))
}

/// 루트 페이지. 로그인 페이지를 서빙합니다.
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn index(server: web::Data<ServerConfig>) -> Result<NamedFile, AppError> {
    open_page(&server.static_root, "login.html").await
}

/// 로그인 페이지
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login_page(server: web::Data<ServerConfig>) -> Result<NamedFile, AppError> {
    open_page(&server.static_root, "login.html").await
}

/// 회원가입 페이지
///
/// # Endpoint
/// `GET /signup`
#[get("/signup")]
pub async fn signup_page(server: web::Data<ServerConfig>) -> Result<NamedFile, AppError> {
    open_page(&server.static_root, "signup.html").await
}
