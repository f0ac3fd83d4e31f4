//! 데이터 전송 객체 모듈
//!
//! 콘솔 화면에서 들어오는 요청과 인증 백엔드가 돌려주는 응답을 정의합니다.
//!
//! | 타입 | 방향 | 용도 |
//! |------|------|------|
//! | [`LoginRequest`] | 화면 → 콘솔 | 로그인 입력 검증 |
//! | [`RegisterRequest`] | 화면 → 콘솔 | 회원가입 입력 검증 |
//! | [`LoginResponse`] | 백엔드 → 콘솔 | 발급된 자격 증명 추출 |
//! | [`RegistrationResult`] | 백엔드 → 화면 | 회원가입 성공 여부와 메시지 |

pub mod auth_request;
pub mod auth_response;

pub use auth_request::*;
pub use auth_response::*;
