//! 인증 세션 서비스 모듈
//!
//! 콘솔의 클라이언트 측 인증 상태를 담당하는 컴포넌트들을 제공합니다.
//!
//! # 구성 요소
//!
//! ```text
//! RouteGuard ──► SessionState ──► TokenStore ──► KeyValueStorage
//!                     │
//!                     ├──► TokenValidator
//!                     └──► AuthBackend (외부 REST 백엔드)
//! ```
//!
//! - [`TokenStore`]: 고정 키 아래 자격 증명 하나를 영구 보관
//! - [`TokenValidator`]: payload 디코딩과 만료 검사 (서명 검증 없음)
//! - [`SessionState`]: 로그인/회원가입/로그아웃과 현재 사용자
//! - [`AuthBackend`]: 인증 백엔드 협력자 trait 과 HTTP 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SessionState, TokenValidator};
//!
//! if !session.is_authenticated() {
//!     session.login("ops@example.com", "SecurePass123").await?;
//! }
//! let valid = TokenValidator::is_valid(session.token().as_deref());
//! ```

pub mod token_store;
pub mod token_validator;
pub mod auth_backend;
pub mod session_state;

pub use token_store::*;
pub use token_validator::*;
pub use auth_backend::*;
pub use session_state::*;
