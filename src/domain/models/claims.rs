//! 자격 증명 클레임과 현재 사용자 뷰 모델
//!
//! 자격 증명의 두 번째 세그먼트(payload)를 디코딩한 결과를 표현합니다.
//! 서명은 검증하지 않으며, 클레임은 백엔드가 발급한 그대로 신뢰합니다.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 디코딩된 자격 증명 클레임
///
/// 백엔드가 담아 보낸 JSON 객체를 손실 없이 보관합니다.
/// 유효성 판단에는 `exp`만 사용하고, 나머지 필드는 [`CurrentUser`]를 채우는 데 씁니다.
///
/// ## 대표적인 클레임
///
/// - `exp`: 만료 시각 (Unix timestamp, 초)
/// - `iat`: 발급 시각 (Unix timestamp, 초)
/// - `id` / `sub`: 사용자 식별자
/// - `name`, `email`, `role`, `active`, `createdAt`, `updatedAt`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 만료 시각(초)을 반환합니다.
    ///
    /// `exp`가 없거나 숫자가 아니거나 유한하지 않으면 `None`.
    pub fn exp(&self) -> Option<f64> {
        self.0
            .get("exp")
            .and_then(Value::as_f64)
            .filter(|exp| exp.is_finite())
    }
}

/// 현재 로그인한 관리자 정보
///
/// 클레임에서 읽을 수 있는 필드만 채우며, 형식이 맞지 않는 필드는 비워 둡니다.
/// UI는 이 값을 읽기만 하고 직접 수정하지 않습니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    pub admin_user_id: Option<String>,
    /// 사용자 ID (`id`, 없으면 `sub`)
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    pub iat: Option<i64>,
    pub exp: Option<i64>,
}

impl CurrentUser {
    /// 클레임에서 사용자 뷰를 구성합니다. 실패하지 않습니다.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            admin_user_id: text(claims.get("admin_user_id")),
            id: text(claims.get("id")).or_else(|| text(claims.get("sub"))),
            name: text(claims.get("name")),
            email: text(claims.get("email")),
            role: text(claims.get("role")),
            active: claims.get("active").and_then(Value::as_bool),
            created_at: text(claims.get("createdAt")),
            updated_at: text(claims.get("updatedAt")),
            iat: seconds(claims.get("iat")),
            exp: seconds(claims.get("exp")),
        }
    }

    /// 화면에 표시할 이름 (이름 → 이메일 → ID 순)
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .or(self.id.as_deref())
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn seconds(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Claims {
        match value {
            Value::Object(map) => Claims::new(map),
            _ => panic!("claims must be an object"),
        }
    }

    #[test]
    fn test_exp_requires_number() {
        assert_eq!(claims(json!({"exp": 1700000000})).exp(), Some(1_700_000_000.0));
        assert_eq!(claims(json!({"exp": 1700000000.5})).exp(), Some(1_700_000_000.5));
        assert_eq!(claims(json!({"exp": "1700000000"})).exp(), None);
        assert_eq!(claims(json!({"exp": null})).exp(), None);
        assert_eq!(claims(json!({"sub": "u1"})).exp(), None);
    }

    #[test]
    fn test_current_user_from_claims() {
        let c = claims(json!({
            "admin_user_id": "a-1",
            "id": "u-1",
            "name": "Ayşe",
            "email": "ayse@example.com",
            "role": "admin",
            "active": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-02-01T00:00:00Z",
            "iat": 1700000000,
            "exp": 1700003600
        }));

        let user = CurrentUser::from_claims(&c);
        assert_eq!(user.admin_user_id.as_deref(), Some("a-1"));
        assert_eq!(user.id.as_deref(), Some("u-1"));
        assert_eq!(user.email.as_deref(), Some("ayse@example.com"));
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert_eq!(user.active, Some(true));
        assert_eq!(user.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(user.iat, Some(1_700_000_000));
        assert_eq!(user.exp, Some(1_700_003_600));
        assert_eq!(user.display_name(), Some("Ayşe"));
    }

    #[test]
    fn test_current_user_tolerates_odd_shapes() {
        let c = claims(json!({
            "sub": 42,
            "active": "yes",
            "exp": "soon"
        }));

        let user = CurrentUser::from_claims(&c);
        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.active, None);
        assert_eq!(user.exp, None);
        assert_eq!(user.display_name(), Some("42"));
    }

    #[test]
    fn test_current_user_serializes_camel_case_timestamps() {
        let user = CurrentUser {
            created_at: Some("2024-01-01".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01");
        assert!(json.get("created_at").is_none());
    }
}
