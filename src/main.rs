//! 관리 콘솔 세션 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 저장된 자격 증명으로 세션을 복원하고 콘솔 라우트에 가드를 적용합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use admin_console::config::{EnvProfile, GuardConfig, RateLimitConfig, ServerConfig, StorageConfig};
use admin_console::middlewares::GuardMode;
use admin_console::routes::configure_all_routes;
use admin_console::services::auth::{HttpAuthBackend, SessionState, TokenStore};
use admin_console::storage::FileStorage;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env 가 RUST_LOG 를 담을 수 있으므로 먼저 읽고, 결과는 로거 초기화 후 기록
    let profile = EnvProfile::load();
    init_logging();
    profile.report();

    info!("🚀 관리 콘솔 세션 서비스 시작중...");

    let session = web::Data::new(initialize_session()?);

    info!(
        "✅ 세션 초기화 완료 (인증 상태: {})",
        if session.is_authenticated() { "로그인" } else { "로그아웃" }
    );

    if !ServerConfig::is_loopback(&ServerConfig::host()) {
        warn!(
            "⚠️ HOST={} 는 루프백 주소가 아닙니다. 세션이 모든 접속자에게 공유됩니다",
            ServerConfig::host()
        );
    }

    let guard = GuardMode::from_enabled(GuardConfig::enabled());
    if !guard.is_enabled() {
        warn!("⚠️ 라우트 가드가 비활성화되었습니다. 모든 콘솔 화면이 인증 없이 열립니다");
    }

    // HTTP 서버 시작
    start_http_server(session, guard).await
}

/// 저장소, 인증 백엔드, 세션 상태를 순서대로 구성합니다
///
/// 저장소 파일을 열 수 없거나 HTTP 클라이언트를 만들 수 없으면 서버를 시작하지 않습니다.
fn initialize_session() -> std::io::Result<SessionState> {
    let storage_path = StorageConfig::path();
    info!("📦 세션 저장소: {}", storage_path.display());

    let storage = FileStorage::open(storage_path).map_err(|e| {
        error!("세션 저장소 열기 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let store = TokenStore::new(Arc::new(storage));

    let backend = HttpAuthBackend::from_env(store.clone()).map_err(|e| {
        error!("인증 백엔드 클라이언트 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    Ok(SessionState::initialize(store, Arc::new(backend)))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(session: web::Data<SessionState>, guard: GuardMode) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: http://{}/login", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정이 올바르지 않습니다: {:?}", rate_limit_config);
            std::io::Error::other("invalid rate limit configuration")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 세션 상태 공유
            .app_data(session.clone())

            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, guard))
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=admin_console::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 콘솔 프론트엔드 개발 서버와 자체 서버 주소를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
