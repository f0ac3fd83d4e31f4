//! 콘솔 전역에서 사용하는 에러 시스템
//!
//! 세션 코어와 HTTP 계층이 공유하는 통합 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 세션 계층의 실패를
//! 일관된 JSON 응답으로 변환합니다.
//!
//! ## 전파 정책
//!
//! - `MalformedCredential`은 토큰 검증 경계에서 `false`로 흡수되며 UI까지 올라가지 않습니다.
//! - `BackendUnavailable` / `BackendRejected`는 인증 백엔드에서 발생한 그대로 호출자에게 전달됩니다.
//! - `LoginInProgress` / `LoginSuperseded`는 동시 로그인 보호 장치에서 발생합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn submit_login(session: &SessionState, email: &str, pw: &str) -> Result<(), AppError> {
//!     if email.is_empty() {
//!         return Err(AppError::ValidationError("Email is required".to_string()));
//!     }
//!     session.login(email, pw).await
//! }
//! ```

use thiserror::Error;

/// 콘솔 전역 에러 타입
///
/// 세션 코어, 저장소, 인증 백엔드 호출에서 발생할 수 있는 실패를 포괄합니다.
/// HTTP 핸들러에서 반환되면 자동으로 상태 코드와 JSON 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 자격 증명 페이로드 디코딩 실패 (401 Unauthorized)
    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    /// 인증 백엔드에 도달하지 못함 (502 Bad Gateway)
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// 인증 백엔드가 요청을 거절함 (401 Unauthorized)
    #[error("Backend rejected: {0}")]
    BackendRejected(String),

    /// 이미 진행 중인 로그인이 있음 (409 Conflict)
    #[error("Login already in progress")]
    LoginInProgress,

    /// 로그인 응답 도착 전에 세션이 변경됨 (409 Conflict)
    #[error("Login superseded by a newer session change")]
    LoginSuperseded,

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 영구 저장소 읽기/쓰기 실패 (500 Internal Server Error)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 내부 에러 (500 Internal Server Error)
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedCredential(_) | AppError::BackendRejected(_) => StatusCode::UNAUTHORIZED,
            AppError::LoginInProgress | AppError::LoginSuperseded => StatusCode::CONFLICT,
            AppError::BackendUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::StorageError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 백엔드가 보낸 거절 메시지는 UI가 그대로 표시할 수 있도록 `message` 필드에 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::BackendRejected(msg) | AppError::BackendUnavailable(msg) => msg.clone(),
            other => other.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string(),
                "message": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
