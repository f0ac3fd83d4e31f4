//! 로그인/회원가입 요청 DTO
//!
//! 콘솔의 로그인 화면과 회원가입 화면에서 들어오는 입력을 검증합니다.
//! 검증을 통과하지 못한 요청은 인증 백엔드까지 가지 않습니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 로그인 식별자 (이메일)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 가드가 로그인 화면으로 보내기 전에 요청했던 경로
    #[serde(default)]
    pub from: Option<String>,
}

impl LoginRequest {
    /// 식별자 앞뒤 공백을 제거합니다.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self
    }

    /// 로그인 성공 후 돌아갈 경로
    pub fn redirect_target(&self) -> String {
        safe_return_path(self.from.as_deref())
    }
}

/// 로그인 화면 쿼리 (`GET /login?from=...`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginViewQuery {
    pub from: Option<String>,
}

/// 회원가입 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Operator",
///   "email": "ops@example.com",
///   "password": "SecurePass123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "이름은 1-100자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

impl RegisterRequest {
    /// 이름과 식별자 앞뒤 공백을 제거합니다.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self
    }
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

/// 로그인 후 복귀 경로를 정리합니다.
///
/// 같은 origin 안의 절대 경로(`/`로 시작하고 `//`로 시작하지 않음)만 허용하며,
/// 그 외에는 콘솔 홈(`/`)을 돌려줍니다.
pub fn safe_return_path(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}
