//! 인증 백엔드 응답 DTO
//!
//! 백엔드의 로그인/회원가입 응답 JSON은 형태가 고정되어 있지 않으므로
//! 느슨하게 읽어 들여 콘솔이 쓰는 모양으로 정규화합니다.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 로그인 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 백엔드가 발급한 자격 증명 (header.payload.signature)
    pub token: String,
}

impl LoginResponse {
    /// 자격 증명을 담을 수 있는 필드 이름 (우선순위 순)
    pub const TOKEN_FIELDS: [&'static str; 3] = ["token", "accessToken", "jwt"];

    /// 응답 JSON에서 자격 증명을 꺼냅니다.
    ///
    /// `token` → `accessToken` → `jwt` 순서로 비어 있지 않은 문자열을 찾습니다.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        Self::TOKEN_FIELDS
            .iter()
            .filter_map(|field| payload.get(*field).and_then(Value::as_str))
            .find(|token| !token.is_empty())
            .map(|token| Self { token: token.to_string() })
    }
}

/// 회원가입 결과
///
/// 회원가입은 세션을 만들지 않으며, 백엔드가 준 성공 여부와 메시지를 그대로 전달합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResult {
    pub success: bool,
    pub message: String,
}

impl RegistrationResult {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            success: payload.get("success").is_some_and(is_truthy),
            message: payload.get("message").map(render_text).unwrap_or_default(),
        }
    }
}

/// 백엔드 에러 응답에서 사용자에게 보여줄 메시지를 고릅니다.
///
/// 본문의 `message`가 있으면 그것을, 없으면 HTTP 상태 설명을 사용합니다.
pub fn rejection_message(payload: Option<&Value>, status_text: &str) -> String {
    payload
        .and_then(|body| body.get("message"))
        .map(render_text)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| status_text.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_field_fallbacks() {
        assert_eq!(
            LoginResponse::from_payload(&json!({"token": "t1"})).map(|r| r.token),
            Some("t1".to_string())
        );
        assert_eq!(
            LoginResponse::from_payload(&json!({"accessToken": "t2"})).map(|r| r.token),
            Some("t2".to_string())
        );
        assert_eq!(
            LoginResponse::from_payload(&json!({"jwt": "t3"})).map(|r| r.token),
            Some("t3".to_string())
        );
        // 빈 문자열은 건너뛰고 다음 필드 사용
        assert_eq!(
            LoginResponse::from_payload(&json!({"token": "", "jwt": "t4"})).map(|r| r.token),
            Some("t4".to_string())
        );
    }

    #[test]
    fn test_login_response_missing_token() {
        assert!(LoginResponse::from_payload(&json!({})).is_none());
        assert!(LoginResponse::from_payload(&json!({"token": 123})).is_none());
        assert!(LoginResponse::from_payload(&json!("token")).is_none());
    }

    #[test]
    fn test_registration_result_mapping() {
        assert_eq!(
            RegistrationResult::from_payload(&json!({"success": true, "message": "ok"})),
            RegistrationResult { success: true, message: "ok".to_string() }
        );
        assert_eq!(
            RegistrationResult::from_payload(&json!({"success": 0})),
            RegistrationResult { success: false, message: String::new() }
        );
        assert_eq!(
            RegistrationResult::from_payload(&json!({"success": "yes", "message": 7})),
            RegistrationResult { success: true, message: "7".to_string() }
        );
        assert_eq!(
            RegistrationResult::from_payload(&json!(null)),
            RegistrationResult { success: false, message: String::new() }
        );
    }

    #[test]
    fn test_rejection_message() {
        let body = json!({"message": "E-posta veya şifre hatalı"});
        assert_eq!(rejection_message(Some(&body), "Unauthorized"), "E-posta veya şifre hatalı");
        assert_eq!(rejection_message(Some(&json!({})), "Unauthorized"), "Unauthorized");
        assert_eq!(rejection_message(None, "Bad Gateway"), "Bad Gateway");
    }
}
