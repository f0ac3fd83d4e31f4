//! 서비스 계층 모듈
//!
//! 콘솔의 비즈니스 로직을 담당합니다. 현재는 인증 세션 서비스만 포함합니다.

pub mod auth;
