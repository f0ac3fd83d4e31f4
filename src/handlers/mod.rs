//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser / Console UI
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   RouteGuard (보호 라우트만)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈)
//! ├─────────────────────────────────────────────┤
//!   SessionState → TokenStore / AuthBackend
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인, 회원가입, 로그아웃, 세션 조회 (공개)
//! - **`console`**: 콘솔 홈과 각 섹션 화면 (가드 적용)
//!
//! 핸들러는 `web::Data<SessionState>`를 주입받아 사용하며,
//! 에러는 `AppError`로 반환해 `ResponseError` 구현이 응답으로 변환합니다.

pub mod auth;
pub mod console;
