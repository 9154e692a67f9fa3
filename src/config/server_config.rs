//! 서버 설정 관리 모듈
//!
//! HTTP 서버 바인딩, Rate Limiting, CORS 관련 설정을 관리합니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 3000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
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
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 10)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 20)
    ///
    /// 폼 제출 용도이므로 기본값을 낮게 잡습니다.
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 10 사용", e);
                10
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 20 사용", e);
                20
            });

        let config = RateLimitConfig {
            per_second: per_second.max(1),
            burst_size: burst_size.max(1),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분된 목록을 지정합니다.
    /// 비어 있거나 설정되지 않은 경우 빈 벡터를 반환하며, 이때 모든 Origin을 허용합니다.
    ///
    /// ```bash
    /// export CORS_ALLOWED_ORIGINS="https://example.com,http://localhost:5173"
    /// ```
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
