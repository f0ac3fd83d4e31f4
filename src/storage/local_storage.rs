//! # 로컬 키-값 저장소 구현
//!
//! 브라우저의 origin 범위 영구 저장소(localStorage)에 해당하는 동기식 키→문자열 저장소입니다.
//! 파일 기반 구현은 프로세스 재시작 후에도 값을 유지하고,
//! 메모리 기반 구현은 테스트와 일회성 실행에 사용합니다.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use crate::errors::{AppError, AppResult, ErrorContext};

/// 동기식 키→문자열 저장소
///
/// 모든 연산은 한 번의 호출 안에서 끝나며, 백그라운드 작업을 만들지 않습니다.
pub trait KeyValueStorage: Send + Sync {
    /// 키에 저장된 값을 조회합니다. 키가 없으면 `Ok(None)`.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// 키에 값을 저장합니다. 기존 값은 덮어씁니다.
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// 키를 삭제합니다. 없는 키를 삭제해도 성공합니다.
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// 프로세스 메모리에만 유지되는 저장소
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries
            .read()
            .map_err(|_| AppError::StorageError("메모리 저장소 잠금이 오염되었습니다".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries
            .write()
            .map_err(|_| AppError::StorageError("메모리 저장소 잠금이 오염되었습니다".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries
            .write()
            .map_err(|_| AppError::StorageError("메모리 저장소 잠금이 오염되었습니다".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// JSON 파일 하나에 모든 키를 보관하는 영구 저장소
///
/// 파일 형식은 `{"key": "value", ...}` 형태의 평범한 JSON 객체입니다.
/// 쓰기는 임시 파일에 기록한 뒤 rename 하므로 중간에 중단되어도
/// 기존 파일이 깨지지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use admin_console::storage::{FileStorage, KeyValueStorage};
///
/// let storage = FileStorage::open("./data/console_storage.json")?;
/// storage.set_item("systemDefault", "eyJhbGciOi...")?;
/// assert!(storage.get_item("systemDefault")?.is_some());
/// ```
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    /// 읽기-수정-쓰기 구간 직렬화
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// 저장소 파일을 엽니다.
    ///
    /// 상위 디렉토리가 없으면 생성하고, 기존 파일이 있으면 형식을 검증합니다.
    /// 파일 자체는 첫 쓰기 때 만들어집니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StorageError` - 디렉토리 생성 실패, 기존 파일이 JSON 객체가 아님
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::StorageError(format!("저장소 디렉토리 생성 실패 '{}': {}", parent.display(), e))
            })?;
        }

        let storage = Self {
            path,
            write_lock: Mutex::new(()),
        };

        let entries = storage.read_entries()?;
        log::info!("📁 저장소 파일 열림: {} ({}개 항목)", storage.path.display(), entries.len());

        Ok(storage)
    }

    fn read_entries(&self) -> AppResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::StorageError(format!("저장소 파일 형식 오류 '{}': {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::StorageError(format!(
                "저장소 파일 읽기 실패 '{}': {}", self.path.display(), e
            ))),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries).context("저장소 직렬화 실패")?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            AppError::StorageError(format!("저장소 임시 파일 쓰기 실패 '{}': {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::StorageError(format!("저장소 파일 교체 실패 '{}': {}", self.path.display(), e))
        })
    }

    fn modify<F>(&self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self.write_lock
            .lock()
            .map_err(|_| AppError::StorageError("저장소 잠금이 오염되었습니다".to_string()))?;

        let mut entries = self.read_entries()?;
        if f(&mut entries) {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        // 없는 키면 파일을 건드리지 않음
        self.modify(|entries| entries.remove(key).is_some())
    }
}
