//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 라우트 가드 (RouteGuard)
//! - 보호 라우트 진입 시 `SessionState::is_authenticated` 확인
//! - 미인증 요청은 `302 /login?from=<원래 경로>` 로 리다이렉트
//! - 역할/권한 검사는 하지 않음
//! - `GuardMode::Disabled` 로 명시적으로 끌 수 있음 (개발/스테이징 전용)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::{GuardMode, RouteGuard};
//!
//! App::new()
//!     .app_data(session.clone())
//!     .service(
//!         web::scope("")
//!             .wrap(RouteGuard::new(GuardMode::Enforced))
//!             .service(console_home)
//!     )
//! ```

pub mod route_guard;
mod guard_inner;

// 미들웨어 재export
pub use route_guard::{GuardDecision, GuardMode, RouteGuard, LOGIN_PATH, login_redirect_location};
