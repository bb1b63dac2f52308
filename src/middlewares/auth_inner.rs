//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let tokens = self.tokens.clone();

        Box::pin(async move {
            match authenticate_request(&req, &tokens) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.id);
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    // 실패 응답은 미들웨어가 직접 만들고 핸들러는 실행되지 않음
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "success": false,
                        "error": "Authentication required"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증하여 인증된 사용자를 복원
fn authenticate_request(
    req: &ServiceRequest,
    tokens: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = tokens.extract_bearer_token(auth_header)?;
    let claims = tokens.verify(token)?;

    Ok(AuthenticatedUser::from(claims))
}
