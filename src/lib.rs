//! 관리 콘솔 인증/세션 코어
//!
//! 관리 콘솔 앞단에서 로그인 세션을 보관하고 보호 화면 진입을 통제하는 서비스입니다.
//! 인증 백엔드가 발급한 자격 증명(JWT)을 로컬 저장소에 유지하고,
//! 페이로드의 만료 시각만으로 세션 유효성을 판단합니다.
//!
//! # Features
//!
//! - **TokenStore**: 고정 키(`systemDefault`) 하나에 자격 증명 보관
//! - **TokenValidator**: 서명 검증 없이 페이로드 디코딩 + 만료 확인
//! - **SessionState**: 로그인/회원가입/로그아웃, 현재 사용자 조회
//! - **RouteGuard**: 미인증 요청을 `/login?from=...` 으로 리다이렉트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 공개 라우트 + 가드된 콘솔 라우트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SessionState   │ ← 세션 상태 (web::Data 로 주입)
//! └─────────────────┘
//!      │       │
//!      ▼       ▼
//! ┌────────┐ ┌─────────────┐
//! │ Token  │ │ AuthBackend │ ← 원격 인증 API
//! │ Store  │ └─────────────┘
//! └────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use admin_console::services::auth::{HttpAuthBackend, SessionState, TokenStore};
//!
//! let store = TokenStore::in_memory();
//! let backend = Arc::new(HttpAuthBackend::from_env(store.clone())?);
//! let session = SessionState::initialize(store, backend);
//!
//! session.login("ops@example.com", "secret").await?;
//! assert!(session.is_authenticated());
//! ```

pub mod config;
pub mod errors;
pub mod storage;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
