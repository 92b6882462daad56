//! 설정
//!
//! YAML 파일 또는 환경변수에서 로드합니다. 모든 항목은 생략 가능하며
//! 기본값을 가집니다.
//!
//! ```yaml
//! rate_limit:
//!   max_requests: 100
//!   window_secs: 60
//!   idle_ttl_secs: 600
//! target_prompt:
//!   suppress_hours: 24
//! ```

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::prompt::{TargetPrompt, DEFAULT_SUPPRESS_HOURS};
use crate::ratelimit::{RateLimitConfig, RateLimiter};

pub const ENV_RATE_LIMIT_MAX: &str = "BIMBEL_RATE_LIMIT_MAX";
pub const ENV_RATE_LIMIT_WINDOW_SECS: &str = "BIMBEL_RATE_LIMIT_WINDOW_SECS";
pub const ENV_RATE_LIMIT_IDLE_TTL_SECS: &str = "BIMBEL_RATE_LIMIT_IDLE_TTL_SECS";
pub const ENV_TARGET_PROMPT_SUPPRESS_HOURS: &str = "BIMBEL_TARGET_PROMPT_SUPPRESS_HOURS";

/// 전체 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub target_prompt: TargetPromptConfig,
}

/// 목표 선택 안내 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPromptConfig {
    /// 안내를 다시 띄우지 않는 시간 (시간 단위)
    #[serde(default = "default_suppress_hours")]
    pub suppress_hours: i64,
}

fn default_suppress_hours() -> i64 {
    DEFAULT_SUPPRESS_HOURS
}

impl Default for TargetPromptConfig {
    fn default() -> Self {
        Self {
            suppress_hours: default_suppress_hours(),
        }
    }
}

impl Config {
    /// YAML 문자열에서 로드
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// 환경변수에서 로드 (설정되지 않은 항목은 기본값)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// 주어진 lookup으로 값 덮어쓰기
    ///
    /// `from_env`는 `std::env::var`를 lookup으로 사용합니다.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, ENV_RATE_LIMIT_MAX)? {
            self.rate_limit.max_requests = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_RATE_LIMIT_WINDOW_SECS)? {
            self.rate_limit.window_secs = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_RATE_LIMIT_IDLE_TTL_SECS)? {
            self.rate_limit.idle_ttl_secs = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_TARGET_PROMPT_SUPPRESS_HOURS)? {
            self.target_prompt.suppress_hours = v;
        }

        self.validate()
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        self.rate_limit.validate()?;
        TargetPrompt::from_hours(self.target_prompt.suppress_hours)?;
        Ok(())
    }

    /// 설정에 맞는 rate limiter 생성
    pub fn rate_limiter(&self) -> Result<RateLimiter> {
        RateLimiter::new(self.rate_limit.clone())
    }

    /// 설정에 맞는 목표 선택 안내 규칙
    pub fn target_prompt(&self) -> Result<TargetPrompt> {
        TargetPrompt::from_hours(self.target_prompt.suppress_hours)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| Error::Config {
                message: format!("{}: invalid value '{}': {}", name, raw, e),
            }),
    }
}
