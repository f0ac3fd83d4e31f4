//! 자격 증명 영구 보관소
//!
//! 단 하나의 자격 증명 문자열을 고정 키 아래에 저장합니다.
//! 내용은 검증하지 않으며, 덮어쓰거나 지울 때까지 유지됩니다.

use std::sync::Arc;

use crate::errors::AppResult;
use crate::storage::{KeyValueStorage, MemoryStorage};

/// 자격 증명이 저장되는 고정 키
pub const TOKEN_KEY: &str = "systemDefault";

/// 자격 증명 보관소
///
/// 내부 저장소를 `Arc`로 공유하므로 복제본끼리 같은 값을 봅니다.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// 메모리 저장소 위의 보관소 (재시작 시 사라짐)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// 자격 증명을 저장합니다. 기존 값은 덮어씁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StorageError` - 저장소 쓰기 실패
    pub fn save(&self, token: &str) -> AppResult<()> {
        self.storage.set_item(TOKEN_KEY, token)
    }

    /// 저장된 자격 증명을 읽습니다.
    ///
    /// 실패하지 않습니다. 저장소를 읽을 수 없으면 경고를 남기고 `None`을 돌려줍니다.
    pub fn load(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("저장된 자격 증명 읽기 실패: {}", e);
                None
            }
        }
    }

    /// 저장된 자격 증명을 지웁니다. 여러 번 호출해도 안전합니다.
    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove_item(TOKEN_KEY)
    }
}
