//! 서버 및 저장소 설정 관리 모듈
//!
//! 서버 바인딩, 자격 증명 저장 파일 위치, 요청 제한 관련 설정을 관리합니다.

use std::env;
use std::path::PathBuf;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 콘솔은 운영자 한 명이 로컬에서 사용하는 것을 전제로 하므로
    /// 기본값은 루프백 주소입니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 루프백 주소인지 확인합니다.
    ///
    /// 세션은 서버 전체에 하나뿐이므로 루프백이 아니면
    /// 같은 네트워크의 누구나 로그인된 콘솔에 접근할 수 있습니다.
    pub fn is_loopback(host: &str) -> bool {
        let host = host.trim().trim_start_matches('[').trim_end_matches(']');
        host.eq_ignore_ascii_case("localhost")
            || host
                .parse::<std::net::IpAddr>()
                .is_ok_and(|ip| ip.is_loopback())
    }
}

/// 자격 증명 영구 저장소 설정
///
/// 브라우저의 origin 범위 로컬 저장소에 해당하는 파일 위치를 지정합니다.
/// 파일은 프로세스 재시작 후에도 유지되며, 명시적으로 지울 때까지 남습니다.
pub struct StorageConfig;

impl StorageConfig {
    /// 저장소 파일 경로를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CONSOLE_STORAGE_PATH` (기본값: `./data/console_storage.json`)
    pub fn path() -> PathBuf {
        env::var("CONSOLE_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/console_storage.json"))
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 에러를 기록하고 기본값을 사용합니다.
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };
        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
