//! # Domain Layer Module
//!
//! 세션 코어가 다루는 데이터 모델과 HTTP 계층의 요청/응답 DTO를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 자격 증명 클레임, 현재 사용자 뷰
//! └── DTOs    - 로그인/회원가입 요청, 인증 백엔드 응답
//!      │
//!      ▼
//! Services (TokenStore, TokenValidator, SessionState)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
