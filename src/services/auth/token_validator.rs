//! 자격 증명 유효성 검사
//!
//! 네트워크 없이 "이 자격 증명을 지금 쓸 수 있는가?"에 답합니다.
//! payload 세그먼트만 디코딩하며 서명은 검증하지 않습니다.
//! 서명 검증은 인증 백엔드의 책임입니다.
//!
//! # 디코딩 절차
//!
//! ```text
//! header.payload.signature
//!          │
//!          ▼  URL-safe 알파벳(-, _) → 표준 알파벳(+, /)
//!          ▼  '=' 패딩으로 4의 배수 맞춤
//!          ▼  base64 디코딩 → UTF-8 → JSON 객체
//!        Claims
//! ```

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use chrono::Utc;
use serde_json::Value;

use crate::domain::models::Claims;
use crate::errors::{AppError, AppResult};

/// 표준 알파벳 디코더. 마지막 문자의 사용되지 않는 비트가 0이 아니어도 허용합니다.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// 자격 증명 디코딩 및 만료 검사기
pub struct TokenValidator;

impl TokenValidator {
    /// 자격 증명의 payload 세그먼트를 클레임으로 디코딩합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedCredential` - 세그먼트가 2개 미만, base64/UTF-8/JSON 오류,
    ///   payload가 JSON 객체가 아님
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims = TokenValidator::decode_claims(&token)?;
    /// println!("exp: {:?}", claims.exp());
    /// ```
    pub fn decode_claims(token: &str) -> AppResult<Claims> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next()) {
            (Some(_), Some(payload)) => payload,
            _ => {
                return Err(AppError::MalformedCredential(
                    "자격 증명 세그먼트가 부족합니다".to_string(),
                ));
            }
        };

        let mut encoded: String = payload
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();
        let padding = (4 - encoded.len() % 4) % 4;
        encoded.push_str(&"=".repeat(padding));

        let bytes = PAYLOAD_ENGINE
            .decode(encoded.as_bytes())
            .map_err(|e| AppError::MalformedCredential(format!("base64 디코딩 실패: {}", e)))?;

        let text = String::from_utf8(bytes)
            .map_err(|e| AppError::MalformedCredential(format!("UTF-8 변환 실패: {}", e)))?;

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(Claims::new(map)),
            Ok(_) => Err(AppError::MalformedCredential(
                "payload가 JSON 객체가 아닙니다".to_string(),
            )),
            Err(e) => Err(AppError::MalformedCredential(format!("JSON 파싱 실패: {}", e))),
        }
    }

    /// 현재 시각 기준으로 자격 증명이 유효한지 확인합니다.
    ///
    /// 디코딩 실패는 에러가 아니라 단순히 "유효하지 않음"으로 취급합니다.
    pub fn is_valid(token: Option<&str>) -> bool {
        Self::is_valid_at(token, Utc::now().timestamp_millis())
    }

    /// 주어진 시각(밀리초)을 기준으로 자격 증명이 유효한지 확인합니다.
    ///
    /// `now_millis < exp * 1000` 일 때만 유효합니다. 시계 오차 허용은 없습니다.
    pub fn is_valid_at(token: Option<&str>, now_millis: i64) -> bool {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return false;
        };

        let claims = match Self::decode_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("자격 증명 검사 실패: {}", e);
                return false;
            }
        };

        match claims.exp() {
            Some(exp) => (now_millis as f64) < exp * 1000.0,
            None => {
                log::debug!("자격 증명에 숫자형 exp 클레임이 없습니다");
                false
            }
        }
    }
}
