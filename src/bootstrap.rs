//! 단계적 부트스트랩 시퀀스
//!
//! 애플리케이션 컴포넌트를 의존 순서대로 명시적으로 조립합니다.
//!
//! ```text
//! 1. 설정 구성     (AuthConfig, ServerConfig - 실패 시 시작 중단)
//! 2. 저장소 선택   (MONGODB_URI 유무에 따라 MongoDB 또는 메모리)
//! 3. 서비스 생성   (TokenService, GoogleAuthService)
//! 4. 라우트 등록   (routes::configure_all_routes)
//! 5. 리스너 시작   (main.rs)
//! ```
//!
//! 설정이 라우트 등록보다, 라우트 등록이 리스너 시작보다 먼저 온다는
//! 순서 제약이 소스 코드 배치가 아니라 타입 의존성으로 강제됩니다.
//! `configure_all_routes`는 완성된 [`AppComponents`] 없이는 호출할 수
//! 없습니다.

use std::env;
use std::sync::Arc;

use crate::config::{AuthConfig, ServerConfig};
use crate::errors::AppError;
use crate::services::auth::{GoogleAuthService, TokenService};
use crate::store::{MemoryUserStore, MongoUserStore, UserStore};

/// 조립이 끝난 애플리케이션 컴포넌트 집합
///
/// 워커마다 복제되어 `App` 인스턴스에 주입됩니다. 모든 필드가 `Arc`라
/// 복제 비용은 참조 카운트 증가뿐입니다.
#[derive(Clone)]
pub struct AppComponents {
    /// 인증 설정 (불변)
    pub auth_config: Arc<AuthConfig>,
    /// 서버 설정 (불변)
    pub server_config: Arc<ServerConfig>,
    /// Google OAuth 인증 서비스
    pub google: Arc<GoogleAuthService>,
    /// JWT 토큰 서비스
    pub tokens: Arc<TokenService>,
}

/// 환경 변수에서 전체 컴포넌트를 조립합니다.
///
/// # Errors
///
/// * `AppError::ConfigurationError` - 필수 환경 변수 누락.
///   이 에러는 치명적이며 서버는 리스닝 상태에 도달하지 못합니다.
pub async fn build() -> Result<AppComponents, AppError> {
    let auth_config = Arc::new(AuthConfig::from_env()?);
    let server_config = Arc::new(ServerConfig::from_env());

    let store = build_user_store().await;
    let tokens = Arc::new(TokenService::new(auth_config.clone()));
    let google = Arc::new(GoogleAuthService::new(auth_config.clone(), store));

    Ok(AppComponents {
        auth_config,
        server_config,
        google,
        tokens,
    })
}

/// 사용자 저장소를 선택합니다.
///
/// `MONGODB_URI`가 설정되어 있으면 MongoDB 저장소를 시도하고,
/// 미설정이거나 연결에 실패하면 인메모리 저장소로 폴백합니다.
/// 영속성 장애가 인증 기능 자체를 막지 않아야 하므로 연결 실패는
/// 경고로만 처리합니다.
async fn build_user_store() -> Arc<dyn UserStore> {
    let Ok(uri) = env::var("MONGODB_URI") else {
        log::info!("MONGODB_URI 미설정, 인메모리 사용자 저장소 사용");
        return Arc::new(MemoryUserStore::new());
    };

    let database_name = env::var("MONGODB_DATABASE").ok();

    match MongoUserStore::connect(&uri, database_name.as_deref()).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::warn!("MongoDB 연결 실패, 인메모리 저장소로 폴백: {}", e);
            Arc::new(MemoryUserStore::new())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support;

    #[test]
    fn test_two_component_sets_with_different_configs() {
        let a = test_support::components("/tmp/a");
        let b = test_support::components("/tmp/b");

        assert_ne!(a.server_config.static_root, b.server_config.static_root);
    }
}
