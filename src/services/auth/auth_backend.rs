//! 인증 백엔드 연동
//!
//! 실제 인증(비밀번호 확인, 자격 증명 발급)은 외부 REST 백엔드가 수행합니다.
//! 이 모듈은 그 협력자를 [`AuthBackend`] trait으로 추상화하고,
//! `reqwest` 기반 HTTP 구현을 제공합니다.
//!
//! ## 엔드포인트
//!
//! ```text
//! POST {BASE_API_URL}/auth/login     {email, password}        → {token | accessToken | jwt}
//! POST {BASE_API_URL}/auth/register  {name, email, password}  → {success, message}
//! ```
//!
//! 모든 요청에는 저장된 자격 증명(없으면 `AUTH_TOKEN`)이 Bearer 헤더로 붙습니다.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::ApiConfig;
use crate::domain::dto::{LoginResponse, RegistrationResult, rejection_message};
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenStore;

/// 인증 백엔드 협력자
///
/// 실패는 해석하거나 감싸지 않고 그대로 호출자에게 전달해야 합니다.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// 로그인하여 새 자격 증명을 발급받습니다.
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse>;

    /// 새 관리자 계정을 등록합니다. 세션은 만들지 않습니다.
    async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<RegistrationResult>;
}

/// REST 인증 백엔드 클라이언트
pub struct HttpAuthBackend {
    client: reqwest::Client,
    base_url: String,
    store: TokenStore,
    fallback_token: Option<String>,
}

impl HttpAuthBackend {
    /// 환경 설정(`BASE_API_URL`, `AUTH_TOKEN`, `API_TIMEOUT_SECONDS`)으로 클라이언트를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - HTTP 클라이언트 생성 실패
    pub fn from_env(store: TokenStore) -> AppResult<Self> {
        Self::new(
            ApiConfig::base_url(),
            store,
            ApiConfig::fallback_token(),
            Duration::from_secs(ApiConfig::timeout_seconds()),
        )
    }

    pub fn new(
        base_url: impl Into<String>,
        store: TokenStore,
        fallback_token: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            store,
            fallback_token,
        })
    }

    /// 요청에 붙일 Bearer 토큰 (저장된 자격 증명 우선)
    fn bearer_token(&self) -> Option<String> {
        self.store
            .load()
            .filter(|token| !token.is_empty())
            .or_else(|| self.fallback_token.clone())
    }

    async fn post_json(&self, path: &str, body: &Value) -> AppResult<Value> {
        let url = ApiConfig::join(&self.base_url, path);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::BackendUnavailable(format!("{} 요청 실패: {}", path, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::BackendUnavailable(format!("{} 응답 읽기 실패: {}", path, e)))?;
        let payload = serde_json::from_str::<Value>(&text).ok();

        if !status.is_success() {
            let message = rejection_message(
                payload.as_ref(),
                status.canonical_reason().unwrap_or("request failed"),
            );
            log::warn!("인증 백엔드 오류 응답 - {} {}: {}", path, status, message);

            return Err(if status.is_server_error() {
                AppError::BackendUnavailable(message)
            } else {
                AppError::BackendRejected(message)
            });
        }

        Ok(payload.unwrap_or(Value::Null))
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let payload = self
            .post_json(ApiConfig::LOGIN_PATH, &json!({ "email": email, "password": password }))
            .await?;

        LoginResponse::from_payload(&payload).ok_or_else(|| {
            AppError::BackendRejected("no credential in login response".to_string())
        })
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<RegistrationResult> {
        let payload = self
            .post_json(
                ApiConfig::REGISTER_PATH,
                &json!({ "name": name, "email": email, "password": password }),
            )
            .await?;

        Ok(RegistrationResult::from_payload(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpRequest, HttpResponse, HttpServer, dev::ServerHandle, web};

    /// 가짜 인증 백엔드: 요청의 Authorization 헤더를 응답에 되돌려 줍니다.
    async fn fake_login(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
        let auth = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();

        match body.get("password").and_then(Value::as_str) {
            Some("pw") => HttpResponse::Ok().json(json!({ "accessToken": "issued.token.sig" })),
            Some("echo") => HttpResponse::Ok().json(json!({ "token": auth })),
            Some("no-token") => HttpResponse::Ok().json(json!({ "ok": true })),
            Some("boom") => HttpResponse::InternalServerError().finish(),
            _ => HttpResponse::Unauthorized().json(json!({ "message": "E-posta veya şifre hatalı" })),
        }
    }

    async fn fake_register(body: web::Json<Value>) -> HttpResponse {
        let name = body.get("name").and_then(Value::as_str).unwrap_or_default();
        HttpResponse::Ok().json(json!({ "success": true, "message": format!("{} kaydedildi", name) }))
    }

    async fn spawn_fake_backend() -> (String, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new()
                .route("/auth/login", web::post().to(fake_login))
                .route("/auth/register", web::post().to(fake_register))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        (format!("http://{}", addr), handle)
    }

    fn backend(base_url: &str, store: TokenStore, fallback: Option<&str>) -> HttpAuthBackend {
        HttpAuthBackend::new(
            base_url,
            store,
            fallback.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[actix_web::test]
    async fn test_login_extracts_credential() {
        let (base_url, handle) = spawn_fake_backend().await;
        let backend = backend(&base_url, TokenStore::in_memory(), None);

        let response = backend.login("a@b.com", "pw").await.unwrap();
        assert_eq!(response.token, "issued.token.sig");

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_login_rejection_carries_backend_message() {
        let (base_url, handle) = spawn_fake_backend().await;
        let backend = backend(&base_url, TokenStore::in_memory(), None);

        match backend.login("a@b.com", "wrong").await {
            Err(AppError::BackendRejected(msg)) => assert_eq!(msg, "E-posta veya şifre hatalı"),
            other => panic!("expected BackendRejected, got {:?}", other),
        }

        match backend.login("a@b.com", "no-token").await {
            Err(AppError::BackendRejected(msg)) => assert!(msg.contains("no credential")),
            other => panic!("expected BackendRejected, got {:?}", other),
        }

        assert!(matches!(
            backend.login("a@b.com", "boom").await,
            Err(AppError::BackendUnavailable(_))
        ));

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_unreachable_backend_is_unavailable() {
        // 바인딩 후 바로 닫아 사용되지 않는 포트를 얻음
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let backend = backend(&format!("http://{}", addr), TokenStore::in_memory(), None);

        assert!(matches!(
            backend.login("a@b.com", "pw").await,
            Err(AppError::BackendUnavailable(_))
        ));
    }

    #[actix_web::test]
    async fn test_register_maps_result() {
        let (base_url, handle) = spawn_fake_backend().await;
        let backend = backend(&base_url, TokenStore::in_memory(), None);

        let result = backend.register("Operator", "ops@example.com", "SecurePass123").await.unwrap();
        assert_eq!(
            result,
            RegistrationResult { success: true, message: "Operator kaydedildi".to_string() }
        );

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_requests_carry_bearer_header() {
        let (base_url, handle) = spawn_fake_backend().await;
        let store = TokenStore::in_memory();
        let backend = backend(&base_url, store.clone(), Some("env.token.sig"));

        let response = backend.login("a@b.com", "echo").await.unwrap();
        assert_eq!(response.token, "Bearer env.token.sig");

        store.save("stored.token.sig").unwrap();
        let response = backend.login("a@b.com", "echo").await.unwrap();
        assert_eq!(response.token, "Bearer stored.token.sig");

        handle.stop(true).await;
    }

    #[test]
    fn test_bearer_prefers_stored_credential() {
        let store = TokenStore::in_memory();
        let backend = backend("http://localhost:3000", store.clone(), Some("env.token.sig"));

        assert_eq!(backend.bearer_token(), Some("env.token.sig".to_string()));

        store.save("stored.token.sig").unwrap();
        assert_eq!(backend.bearer_token(), Some("stored.token.sig".to_string()));

        store.clear().unwrap();
        let without_fallback = HttpAuthBackend::new(
            "http://localhost:3000",
            store,
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(without_fallback.bearer_token(), None);
    }
}
