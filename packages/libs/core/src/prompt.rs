//! 목표 선택 안내 표시 규칙
//!
//! 목표(target)를 아직 고르지 않은 사용자에게 선택 안내를 띄우되,
//! 한 번 띄운 뒤에는 일정 시간(기본 24시간) 동안 다시 띄우지 않습니다.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};

/// 기본 억제 시간 (시간 단위)
pub const DEFAULT_SUPPRESS_HOURS: i64 = 24;

/// 목표 선택 안내 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPrompt {
    suppress_for: Duration,
}

impl Default for TargetPrompt {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_SUPPRESS_HOURS))
    }
}

impl TargetPrompt {
    pub fn new(suppress_for: Duration) -> Self {
        Self { suppress_for }
    }

    /// 시간 단위로 생성
    ///
    /// 음수이거나 `Duration` 범위를 넘는 값은 에러입니다.
    pub fn from_hours(hours: i64) -> Result<Self> {
        if hours < 0 {
            return Err(Error::Config {
                message: "target_prompt.suppress_hours must not be negative".to_string(),
            });
        }
        Duration::try_hours(hours)
            .map(Self::new)
            .ok_or_else(|| Error::Config {
                message: format!("target_prompt.suppress_hours out of range: {}", hours),
            })
    }

    pub fn suppress_for(&self) -> Duration {
        self.suppress_for
    }

    /// 안내를 띄울지
    ///
    /// 한 번도 띄운 적이 없거나, 마지막 표시 후 억제 시간이 지났으면 `true`.
    /// 마지막 표시 시각이 `now`보다 미래라면 (시계 오차) 억제합니다.
    pub fn should_show(&self, last_shown: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last_shown {
            None => true,
            Some(shown_at) => now - shown_at >= self.suppress_for,
        }
    }

    /// 목표 보유 여부까지 고려한 판정
    pub fn should_show_for_target(
        &self,
        has_target: bool,
        last_shown: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        !has_target && self.should_show(last_shown, now)
    }
}
