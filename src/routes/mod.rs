//! 라우트 설정 모듈
//!
//! 공개 라우트(헬스체크, 로그인/회원가입/로그아웃)와
//! 라우트 가드가 적용된 콘솔 라우트를 등록합니다.
//!
//! # 등록 순서
//!
//! 콘솔 스코프는 빈 prefix(`""`)를 사용하므로 모든 경로와 매칭됩니다.
//! 공개 라우트를 반드시 먼저 등록해야 로그인 화면이 가드에 걸리지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(session.clone())
//!     .configure(|cfg| configure_all_routes(cfg, GuardMode::Enforced));
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::{GuardMode, RouteGuard};

/// 모든 라우트를 설정합니다
///
/// `guard`는 `/session` 응답에도 노출되도록 앱 데이터로 함께 등록됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, guard: GuardMode) {
    cfg.app_data(web::Data::new(guard));

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_console_routes(cfg, guard);
}

/// 인증 관련 공개 라우트
///
/// - `GET /login`, `POST /login`
/// - `POST /register`
/// - `POST /logout`
/// - `GET /session`
///
/// ```bash
/// curl -X POST http://localhost:8080/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ops@example.com","password":"secret","from":"/youtube"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login_view)
        .service(handlers::auth::login)
        .service(handlers::auth::register)
        .service(handlers::auth::logout)
        .service(handlers::auth::session_info);
}

/// 가드가 적용된 콘솔 라우트
///
/// 등록되지 않은 경로는 인증 확인 후 콘솔 홈으로 리다이렉트됩니다.
fn configure_console_routes(cfg: &mut web::ServiceConfig, guard: GuardMode) {
    cfg.service(
        web::scope("")
            .wrap(RouteGuard::new(guard))
            .service(handlers::console::console_home)
            .service(handlers::console::console_section)
            .default_service(web::to(handlers::console::redirect_home)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{SessionState, TokenStore};
    use crate::test_support::{MockAuthBackend, admin_token};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use serde_json::Value;
    use std::sync::Arc;

    fn session(backend: MockAuthBackend) -> web::Data<SessionState> {
        web::Data::new(SessionState::initialize(TokenStore::in_memory(), Arc::new(backend)))
    }

    #[actix_web::test]
    async fn test_health_is_public() {
        let app = test::init_service(
            App::new()
                .app_data(session(MockAuthBackend::rejecting()))
                .configure(|cfg| configure_all_routes(cfg, GuardMode::Enforced)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");

        let req = test::TestRequest::get().uri("/login").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_full_login_flow() {
        let session = session(MockAuthBackend::issuing(admin_token(3600)));
        let app = test::init_service(
            App::new()
                .app_data(session.clone())
                .configure(|cfg| configure_all_routes(cfg, GuardMode::Enforced)),
        )
        .await;

        // 미인증 → 로그인 화면으로
        let req = test::TestRequest::get().uri("/youtube").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login?from=%2Fyoutube");

        // 로그인 → 원래 경로
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "a@b.com", "password": "pw", "from": "/youtube" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["redirect_to"], "/youtube");

        let req = test::TestRequest::get().uri("/youtube").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"], "youtube");
        assert_eq!(body["user"]["role"], "admin");

        // 알 수 없는 섹션 → 홈
        let req = test::TestRequest::get().uri("/settings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["sections"].as_array().map(Vec::len), Some(10));

        // 로그아웃 → 다시 가드에 걸림
        let req = test::TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login?from=%2F");
    }

    #[actix_web::test]
    async fn test_disabled_guard_exposes_console() {
        let app = test::init_service(
            App::new()
                .app_data(session(MockAuthBackend::rejecting()))
                .configure(|cfg| configure_all_routes(cfg, GuardMode::Disabled)),
        )
        .await;

        let req = test::TestRequest::get().uri("/versions").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["view"], "versions");
        assert_eq!(body["user"], Value::Null);

        let req = test::TestRequest::get().uri("/session").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["guard_enabled"], false);
        assert_eq!(body["is_authenticated"], false);
    }
}
