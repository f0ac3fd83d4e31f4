//! 실행 프로필별 `.env` 로딩
//!
//! `.env` 파일이 `RUST_LOG`를 담을 수 있으므로 로거보다 먼저 읽고,
//! 결과는 로거 초기화 후 [`EnvProfile::report`]로 남깁니다.
//!
//! * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
//! * `PROFILE=prod` - .env.prod 파일 로드
//! * 기타 - 기본 .env 파일 로드

use std::env;

/// 프로필 로딩 결과
#[derive(Debug)]
pub struct EnvProfile {
    pub profile: String,
    pub file: &'static str,
    pub outcome: Result<(), String>,
}

impl EnvProfile {
    /// `PROFILE`에 맞는 파일을 환경 변수로 읽어 들입니다. 로그는 남기지 않습니다.
    pub fn load() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
        let file = Self::file_for(&profile);

        let outcome = dotenv::from_filename(file)
            .map(|_| ())
            .map_err(|e| e.to_string());

        Self { profile, file, outcome }
    }

    pub fn file_for(profile: &str) -> &'static str {
        match profile {
            "prod" => ".env.prod",
            "dev" => ".env.dev",
            _ => ".env",
        }
    }

    /// 로딩 결과를 기록합니다.
    pub fn report(&self) {
        log::info!("Current profile: {}", self.profile);

        match &self.outcome {
            Ok(()) => log::info!("{} 파일 로드 됨", self.file),
            Err(e) => log::error!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}
