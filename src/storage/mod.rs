//! 영구 저장소 계층 모듈
//!
//! 세션 자격 증명을 보관하는 동기식 키-값 저장소를 제공합니다.
//!
//! # 주요 기능
//!
//! - [`KeyValueStorage`] trait: `get_item` / `set_item` / `remove_item`
//! - [`FileStorage`]: JSON 파일 기반, 재시작 후에도 유지
//! - [`MemoryStorage`]: 프로세스 메모리 기반
//!
//! # 환경 설정
//!
//! ```bash
//! CONSOLE_STORAGE_PATH=./data/console_storage.json  # 기본값
//! ```

pub mod local_storage;

pub use local_storage::*;
