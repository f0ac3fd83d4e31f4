//! 테스트 공용 도우미: 자격 증명 발급과 가짜 인증 백엔드

use std::future::poll_fn;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::task::Poll;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use crate::domain::dto::{LoginResponse, RegistrationResult};
use crate::errors::{AppError, AppResult};
use crate::services::auth::AuthBackend;

pub fn now_seconds() -> i64 {
    Utc::now().timestamp()
}

/// 임의의 클레임으로 HS256 자격 증명을 발급합니다.
pub fn mint_token(claims: Value) -> String {
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap()
}

/// 관리자 프로필 클레임을 담고 `offset_secs` 뒤에 만료되는 자격 증명
pub fn admin_token(offset_secs: i64) -> String {
    let now = now_seconds();
    mint_token(json!({
        "id": "65f0c0ffee",
        "name": "Operator",
        "email": "a@b.com",
        "role": "admin",
        "active": true,
        "iat": now,
        "exp": now + offset_secs
    }))
}

/// 호출 횟수를 세는 가짜 인증 백엔드
pub struct MockAuthBackend {
    issued_token: Mutex<Option<String>>,
    registration: RegistrationResult,
    gate: Option<Arc<AtomicBool>>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
}

impl MockAuthBackend {
    /// 로그인 시 항상 `token`을 발급
    pub fn issuing(token: impl Into<String>) -> Self {
        Self {
            issued_token: Mutex::new(Some(token.into())),
            registration: RegistrationResult { success: true, message: "kayıt başarılı".to_string() },
            gate: None,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }

    /// 로그인을 항상 거절
    pub fn rejecting() -> Self {
        let backend = Self::issuing(String::new());
        *backend.issued_token.lock().unwrap() = None;
        backend
    }

    /// `gate`가 `true`가 될 때까지 로그인 응답을 보류
    pub fn gated(mut self, gate: Arc<AtomicBool>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_registration(mut self, registration: RegistrationResult) -> Self {
        self.registration = registration;
        self
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, _email: &str, _password: &str) -> AppResult<LoginResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = self.gate.clone() {
            // 테스트가 직접 다시 poll 하므로 waker 등록은 생략
            poll_fn(move |_| {
                if gate.load(Ordering::SeqCst) {
                    Poll::Ready(())
                } else {
                    Poll::Pending
                }
            })
            .await;
        }

        let issued = self.issued_token.lock().unwrap().clone();
        issued
            .map(|token| LoginResponse { token })
            .ok_or_else(|| AppError::BackendRejected("invalid credentials".to_string()))
    }

    async fn register(&self, _name: &str, _email: &str, _password: &str) -> AppResult<RegistrationResult> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.registration.clone())
    }
}
