//! # Configuration Module
//!
//! 콘솔 서버의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수(`.env` 프로필 파일 포함)에서 읽으며,
//! 값이 없으면 로컬 개발에 안전한 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, 자격 증명 저장소, Rate Limiting 설정
//! - [`auth_config`] - 인증 백엔드 접속 정보, 라우트 가드 설정
//! - [`env_profile`] - `PROFILE`별 `.env` 파일 로딩
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # 인증 백엔드
//! export BASE_API_URL="https://api.example.com"
//!
//! # 자격 증명 저장소
//! export CONSOLE_STORAGE_PATH="./data/console_storage.json"
//!
//! # 라우트 가드 (개발/스테이징에서만 끄세요)
//! export AUTH_GUARD_ENABLED="true"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod env_profile;

pub use data_config::*;
pub use auth_config::*;
pub use env_profile::*;
