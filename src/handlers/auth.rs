//! Authentication HTTP Handlers
//!
//! 콘솔 로그인/회원가입/로그아웃 화면의 제출 동작을 처리합니다.
//! 모든 세션 변경은 `SessionState`를 거치며, 핸들러는 토큰 저장소를 직접 만지지 않습니다.
//!
//! # Endpoints
//!
//! - `GET /login` - 로그인 화면 (가드가 붙여준 `from` 전달)
//! - `POST /login` - 이메일/비밀번호 로그인
//! - `POST /register` - 회원가입 (세션 상태 변경 없음)
//! - `POST /logout` - 로그아웃 후 로그인 화면으로
//! - `GET /session` - 현재 세션 요약
use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::{LoginRequest, LoginViewQuery, RegisterRequest, safe_return_path};
use crate::errors::AppError;
use crate::middlewares::{GuardMode, LOGIN_PATH};
use crate::services::auth::SessionState;

/// 로그인 화면 핸들러
///
/// # Endpoint
/// `GET /login?from=/youtube`
#[get("/login")]
pub async fn login_view(
    session: web::Data<SessionState>,
    query: web::Query<LoginViewQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "view": "login",
        "from": safe_return_path(query.from.as_deref()),
        "is_authenticated": session.is_authenticated(),
    }))
}

/// 로그인 제출 핸들러
///
/// 성공하면 새 세션이 저장되고 복귀 경로를 돌려줍니다.
/// 실패하면 세션은 그대로이며 에러 메시지를 화면에 표시할 수 있도록 반환합니다.
///
/// # Endpoint
/// `POST /login`
///
/// # Request Body
/// ```json
/// { "email": "ops@example.com", "password": "secret", "from": "/youtube" }
/// ```
#[post("/login")]
pub async fn login(
    session: web::Data<SessionState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().normalized();

    // 유효성 검사
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    session.login(&request.email, &request.password).await?;

    let redirect_to = request.redirect_target();
    log::info!("로그인 완료 - 사용자: {}, 이동: {}", request.email, redirect_to);

    Ok(HttpResponse::Ok().json(json!({
        "redirect_to": redirect_to,
        "user": session.current_user(),
    })))
}

/// 회원가입 핸들러
///
/// 백엔드 결과를 그대로 전달하며 로그인 상태는 바꾸지 않습니다.
///
/// # Endpoint
/// `POST /register`
#[post("/register")]
pub async fn register(
    session: web::Data<SessionState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().normalized();

    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = session
        .register(&request.name, &request.email, &request.password)
        .await?;

    if !result.success {
        log::warn!("회원가입 거절 - {}: {}", request.email, result.message);
    }

    Ok(HttpResponse::Ok().json(result))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /logout`
#[post("/logout")]
pub async fn logout(session: web::Data<SessionState>) -> HttpResponse {
    session.logout();

    HttpResponse::Ok().json(json!({ "redirect_to": LOGIN_PATH }))
}

/// 현재 세션 요약
///
/// # Endpoint
/// `GET /session`
#[get("/session")]
pub async fn session_info(
    session: web::Data<SessionState>,
    guard: web::Data<GuardMode>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "is_authenticated": session.is_authenticated(),
        "user": session.current_user(),
        "guard_enabled": guard.is_enabled(),
    }))
}
