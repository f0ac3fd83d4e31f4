//! 도메인 모델 모듈
//!
//! - [`Claims`]: 자격 증명 payload 를 손실 없이 보관하는 클레임 집합
//! - [`CurrentUser`]: 클레임에서 구성한 현재 사용자 뷰 모델

pub mod claims;

pub use claims::*;
