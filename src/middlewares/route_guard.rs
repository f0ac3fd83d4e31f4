//! 보호 라우트 가드 미들웨어
//!
//! 콘솔 화면에 들어가기 전에 세션 인증 여부를 확인하고,
//! 인증되지 않았으면 원래 요청 경로를 담아 로그인 화면으로 리다이렉트합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::guard_inner::RouteGuardService;
use crate::services::auth::SessionState;

/// 로그인 화면 경로
pub const LOGIN_PATH: &str = "/login";

/// 가드 동작 모드
///
/// `Disabled`는 개발/스테이징 편의를 위한 명시적 선택이며,
/// 모든 요청을 인증된 것으로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardMode {
    Enforced,
    Disabled,
}

impl GuardMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            GuardMode::Enforced
        } else {
            GuardMode::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, GuardMode::Enforced)
    }

    /// 보호 경로 진입 여부를 결정합니다.
    ///
    /// 같은 세션 상태에 대해 몇 번을 호출해도 같은 결과를 냅니다.
    /// 세션이 등록되어 있지 않으면 인증되지 않은 것으로 봅니다.
    pub fn decide(&self, session: Option<&SessionState>, requested: &str) -> GuardDecision {
        let authenticated = match self {
            GuardMode::Disabled => true,
            GuardMode::Enforced => session.is_some_and(SessionState::is_authenticated),
        };

        if authenticated {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect {
                location: login_redirect_location(requested),
            }
        }
    }
}

/// 가드 판정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { location: String },
}

/// 원래 요청 경로를 `from` 쿼리에 담은 로그인 화면 주소
pub fn login_redirect_location(requested: &str) -> String {
    format!("{}?from={}", LOGIN_PATH, urlencoding::encode(requested))
}

/// 라우트 가드 미들웨어
///
/// ```rust,ignore
/// App::new()
///     .app_data(session.clone())
///     .service(
///         web::scope("")
///             .wrap(RouteGuard::new(GuardMode::Enforced))
///             .service(handlers::console::console_home)
///     )
/// ```
pub struct RouteGuard {
    mode: GuardMode,
}

impl RouteGuard {
    pub fn new(mode: GuardMode) -> Self {
        Self { mode }
    }

    pub fn enforced() -> Self {
        Self::new(GuardMode::Enforced)
    }

    pub fn disabled() -> Self {
        Self::new(GuardMode::Disabled)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RouteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RouteGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}
