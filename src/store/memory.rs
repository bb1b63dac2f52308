//! 인메모리 사용자 저장소

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{GoogleProfile, User};
use crate::errors::{AppError, AppResult};
use crate::store::UserStore;

/// 프로세스 메모리 기반 사용자 저장소
///
/// `google_id`를 키로 하는 HashMap에 사용자를 보관합니다.
/// 외부 의존성이 전혀 없는 기본 구성이며, 사용자 레코드의 수명은
/// 프로세스 수명과 같습니다. 잠금은 동기 맵 연산 동안에만 유지되고
/// await 지점을 넘지 않습니다.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    /// 저장소가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn resolve(&self, profile: &GoogleProfile) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AppError::InternalError(format!("사용자 맵 잠금 실패: {}", e)))?;

        let user = users
            .entry(profile.id.clone())
            .and_modify(|existing| existing.apply_profile(profile))
            .or_insert_with(|| User::from_profile(profile));

        Ok(user.clone())
    }

    fn backend_name(&self) -> &'static str {
        "Memory"
    }
}
