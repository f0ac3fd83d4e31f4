//! 에러 타입 모듈
//!
//! [`AppError`]와 [`AppResult`], 그리고 외부 에러 변환용 [`ErrorContext`]를 제공합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
