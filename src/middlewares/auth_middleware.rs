//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! 검증이 통과한 요청의 extensions에는 항상 `AuthenticatedUser`가 담기므로
//! 다운스트림 핸들러는 인증을 다시 검사하지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 토큰 검증에 사용할 [`TokenService`]를 생성 시점에 주입받습니다.
pub struct AuthMiddleware {
    tokens: Arc<TokenService>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}
