//! # Authentication Configuration Module
//!
//! 인증 백엔드 접속 정보와 라우트 가드 동작을 관리하는 모듈입니다.
//!
//! ## 환경 변수 설정
//!
//! ### 인증 백엔드
//! ```bash
//! export BASE_API_URL="https://api.example.com"   # 없으면 BASE_URL 사용
//! export AUTH_TOKEN="eyJhbGciOi..."               # 저장된 토큰이 없을 때 쓰는 Bearer 토큰 (선택)
//! export API_TIMEOUT_SECONDS="30"
//! ```
//!
//! ### 라우트 가드
//! ```bash
//! export AUTH_GUARD_ENABLED="true"   # false 로 두면 보호 라우트 검사를 건너뜁니다 (개발/스테이징 전용)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ApiConfig, GuardConfig};
//!
//! let login_url = ApiConfig::join(&ApiConfig::base_url(), ApiConfig::LOGIN_PATH);
//! if !GuardConfig::enabled() {
//!     log::warn!("guard disabled");
//! }
//! ```

use std::env;

/// 인증 백엔드(REST API) 접속 설정
pub struct ApiConfig;

impl ApiConfig {
    /// 로그인 엔드포인트 경로
    pub const LOGIN_PATH: &'static str = "/auth/login";

    /// 회원가입 엔드포인트 경로
    pub const REGISTER_PATH: &'static str = "/auth/register";

    /// 백엔드 기본 URL을 반환합니다.
    ///
    /// `BASE_API_URL` → `BASE_URL` 순서로 확인하며, 둘 다 없으면
    /// `http://localhost:3000`을 사용합니다. 끝의 `/`는 제거됩니다.
    pub fn base_url() -> String {
        let raw = env::var("BASE_API_URL")
            .or_else(|_| env::var("BASE_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        raw.trim_end_matches('/').to_string()
    }

    /// 기본 URL과 경로 사이의 `/` 중복을 정리하여 결합합니다.
    pub fn join(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// 저장된 자격 증명이 없을 때 사용할 Bearer 토큰 (선택)
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_TOKEN`
    pub fn fallback_token() -> Option<String> {
        env::var("AUTH_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    /// 백엔드 요청 타임아웃 (초). 기본값: 30
    pub fn timeout_seconds() -> u64 {
        env::var("API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(30)
    }
}

/// 라우트 가드 설정
///
/// 가드를 끄는 것은 개발/스테이징 편의를 위한 명시적 선택이어야 하므로
/// 기본값은 항상 활성화이며, 비활성화된 경우 시작 시 경고를 남깁니다.
pub struct GuardConfig;

impl GuardConfig {
    /// 가드 활성화 여부를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_GUARD_ENABLED` (기본값: `true`)
    pub fn enabled() -> bool {
        match env::var("AUTH_GUARD_ENABLED") {
            Ok(raw) => Self::parse_flag(&raw).unwrap_or_else(|| {
                log::error!("AUTH_GUARD_ENABLED 값 '{}' 을(를) 해석할 수 없습니다. 기본값 true 사용", raw);
                true
            }),
            Err(_) => true,
        }
    }

    /// 불리언 플래그 문자열을 해석합니다. 대소문자를 구분하지 않습니다.
    ///
    /// # Returns
    ///
    /// * `Some(bool)` - `true/false/1/0/yes/no/on/off`
    /// * `None` - 그 외 값
    pub fn parse_flag(raw: &str) -> Option<bool> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}
