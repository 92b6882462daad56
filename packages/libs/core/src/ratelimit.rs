//! Rate Limiting
//!
//! 키(IP, 사용자 ID 등)별 token bucket입니다. 전역 싱글턴이 아니라
//! 호출자가 소유하고 주입하는 저장소이며, 보통 `Arc<RateLimiter>`로 공유합니다.
//!
//! 시간은 인자로 받습니다(`Instant`). 오래 쓰이지 않은 bucket은
//! [`RateLimiter::evict_idle`]로 명시적으로 제거합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rate limit 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// 윈도우당 최대 요청 수 (bucket 용량)
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// 윈도우 길이 (초). 이 시간 동안 bucket이 가득 찰 만큼 충전됩니다.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// 이 시간 동안 요청이 없던 bucket은 제거 대상 (초)
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    60
}

fn default_idle_ttl_secs() -> u64 {
    600
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
            idle_ttl_secs: default_idle_ttl_secs(),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64, idle_ttl_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            idle_ttl_secs,
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.max_requests == 0 {
            return Err(Error::Config {
                message: "rate_limit.max_requests must be greater than 0".to_string(),
            });
        }
        if self.window_secs == 0 {
            return Err(Error::Config {
                message: "rate_limit.window_secs must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    /// 초당 충전되는 토큰 수
    fn refill_per_sec(&self) -> f64 {
        self.max_requests as f64 / self.window_secs as f64
    }
}

/// Rate limit 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// 허용 (남은 요청 수)
    Allowed { remaining: u32 },

    /// 제한됨 (다음 토큰까지 대기 시간)
    Limited { retry_after: Duration },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed { .. })
    }
}

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
    last_seen: Instant,
}

/// 키별 token bucket 저장소
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    /// 새 limiter 생성
    pub fn new(config: RateLimitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            buckets: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// 요청 하나를 소비
    pub fn check(&self, key: &str, now: Instant) -> RateDecision {
        let capacity = self.config.max_requests as f64;
        let rate = self.config.refill_per_sec();

        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        let bucket = buckets.entry(key.to_string()).or_insert(Bucket {
            tokens: capacity,
            last_refill: now,
            last_seen: now,
        });

        let elapsed = now.saturating_duration_since(bucket.last_refill);
        bucket.tokens = (bucket.tokens + elapsed.as_secs_f64() * rate).min(capacity);
        bucket.last_refill = now;
        bucket.last_seen = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return RateDecision::Allowed {
                remaining: bucket.tokens.floor() as u32,
            };
        }

        // 충전 속도가 아주 느리면 Duration 범위를 넘을 수 있음
        let retry_after = Duration::try_from_secs_f64((1.0 - bucket.tokens) / rate)
            .unwrap_or(Duration::MAX);
        tracing::debug!(key, retry_after_ms = retry_after.as_millis() as u64, "rate limited");
        RateDecision::Limited { retry_after }
    }

    /// 요청 하나를 소비하고, 제한되면 에러로 변환
    pub fn check_or_err(&self, key: &str, now: Instant) -> Result<u32> {
        match self.check(key, now) {
            RateDecision::Allowed { remaining } => Ok(remaining),
            RateDecision::Limited { retry_after } => Err(Error::RateLimited {
                key: key.to_string(),
                retry_after_secs: retry_after.as_secs_f64().ceil() as u64,
            }),
        }
    }

    /// idle TTL이 지난 bucket 제거
    ///
    /// 제거된 bucket 수를 돌려줍니다.
    pub fn evict_idle(&self, now: Instant) -> usize {
        let ttl = self.config.idle_ttl();
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        let before = buckets.len();
        buckets.retain(|_, bucket| now.saturating_duration_since(bucket.last_seen) < ttl);

        let evicted = before - buckets.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = buckets.len(), "evicted idle rate limit buckets");
        }
        evicted
    }

    /// 현재 추적 중인 키 수
    pub fn tracked_keys(&self) -> usize {
        self.buckets.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max: u32, window: u64, ttl: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig::new(max, window, ttl)).unwrap()
    }

    #[test]
    fn test_allows_up_to_capacity() {
        let limiter = limiter(3, 3, 60);
        let now = Instant::now();

        assert_eq!(limiter.check("ip", now), RateDecision::Allowed { remaining: 2 });
        assert_eq!(limiter.check("ip", now), RateDecision::Allowed { remaining: 1 });
        assert_eq!(limiter.check("ip", now), RateDecision::Allowed { remaining: 0 });
        assert!(!limiter.check("ip", now).is_allowed());
    }

    #[test]
    fn test_retry_after() {
        let limiter = limiter(1, 2, 60);
        let now = Instant::now();

        assert!(limiter.check("ip", now).is_allowed());
        match limiter.check("ip", now) {
            RateDecision::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(2));
            }
            other => panic!("expected limit, got {other:?}"),
        }
    }

    #[test]
    fn test_refill_over_time() {
        let limiter = limiter(3, 3, 60);
        let start = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check("ip", start).is_allowed());
        }
        assert!(!limiter.check("ip", start).is_allowed());

        // 1초에 토큰 1개 충전
        let later = start + Duration::from_secs(1);
        assert!(limiter.check("ip", later).is_allowed());
        assert!(!limiter.check("ip", later).is_allowed());

        // 충전은 용량을 넘지 않음
        let much_later = start + Duration::from_secs(3600);
        assert_eq!(
            limiter.check("ip", much_later),
            RateDecision::Allowed { remaining: 2 }
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = limiter(1, 60, 60);
        let now = Instant::now();

        assert!(limiter.check("a", now).is_allowed());
        assert!(!limiter.check("a", now).is_allowed());
        assert!(limiter.check("b", now).is_allowed());
        assert_eq!(limiter.tracked_keys(), 2);
    }

    #[test]
    fn test_check_or_err() {
        let limiter = limiter(1, 10, 60);
        let now = Instant::now();

        assert_eq!(limiter.check_or_err("ip", now).unwrap(), 0);
        let err = limiter.check_or_err("ip", now).unwrap_err();
        assert_eq!(err.status_code(), 429);
        assert!(matches!(err, Error::RateLimited { retry_after_secs: 10, .. }));
    }

    #[test]
    fn test_huge_window_saturates_retry_after() {
        let limiter = limiter(1, u64::MAX, 60);
        let now = Instant::now();

        assert!(limiter.check("ip", now).is_allowed());
        assert_eq!(
            limiter.check("ip", now),
            RateDecision::Limited {
                retry_after: Duration::MAX
            }
        );

        let err = limiter.check_or_err("ip", now).unwrap_err();
        assert!(matches!(err, Error::RateLimited { retry_after_secs: u64::MAX, .. }));
    }

    #[test]
    fn test_evict_idle() {
        let limiter = limiter(5, 60, 30);
        let start = Instant::now();

        limiter.check("old", start);
        limiter.check("fresh", start + Duration::from_secs(20));

        assert_eq!(limiter.evict_idle(start + Duration::from_secs(10)), 0);
        assert_eq!(limiter.evict_idle(start + Duration::from_secs(30)), 1);
        assert_eq!(limiter.tracked_keys(), 1);
        assert_eq!(limiter.evict_idle(start + Duration::from_secs(50)), 1);
        assert_eq!(limiter.tracked_keys(), 0);
    }

    #[test]
    fn test_evicted_key_starts_full() {
        let limiter = limiter(1, 60, 5);
        let start = Instant::now();

        assert!(limiter.check("ip", start).is_allowed());
        limiter.evict_idle(start + Duration::from_secs(5));

        let after = start + Duration::from_secs(5);
        assert!(limiter.check("ip", after).is_allowed());
    }

    #[test]
    fn test_invalid_config() {
        assert!(RateLimiter::new(RateLimitConfig::new(0, 60, 60)).is_err());
        let err = RateLimiter::new(RateLimitConfig::new(10, 0, 60)).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let limiter = Arc::new(limiter(100, 60, 60));
        let now = Instant::now();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    (0..50).filter(|_| limiter.check("shared", now).is_allowed()).count()
                })
            })
            .collect();

        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(allowed, 100);
    }
}
