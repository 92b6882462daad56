//! 서버 측 접근 가드
//!
//! [`policy`](super::policy)의 판정 함수를 인가 경계에서 사용할 수 있도록
//! 감싸고, 거부 사유를 에러로 돌려줍니다. 보호된 콘텐츠를 응답하기 전에
//! 항상 이 가드를 통과해야 합니다.

use serde::Serialize;

use super::model::{ContentItem, Subject, UserAccess};
use super::policy::{can_access_content, is_subject_premium};
use super::role::Entitlement;
use crate::error::{Error, Result};

/// 접근 판정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    /// 허용 여부
    pub allowed: bool,

    /// 판정에 사용된 등급
    pub entitlement: Entitlement,

    /// 거부 사유 (allowed=false인 경우)
    pub reason: Option<String>,
}

impl AccessDecision {
    /// 허용 결과 생성
    pub fn allow(entitlement: Entitlement) -> Self {
        Self {
            allowed: true,
            entitlement,
            reason: None,
        }
    }

    /// 거부 결과 생성
    pub fn deny(entitlement: Entitlement, reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            entitlement,
            reason: Some(reason.into()),
        }
    }
}

/// 과목 잠금 표시 정보 (목록 렌더링용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectLock {
    #[serde(rename = "subjectId")]
    pub subject_id: String,

    pub order: u32,

    /// premium 잠금 아이콘 표시 여부
    pub locked: bool,
}

/// 접근 가드
///
/// 한 사용자에 대해 콘텐츠 접근을 판정합니다.
pub struct AccessGuard<'a> {
    user: &'a UserAccess,
}

impl<'a> AccessGuard<'a> {
    /// 새 가드 생성
    pub fn new(user: &'a UserAccess) -> Self {
        Self { user }
    }

    /// 콘텐츠 접근 판정
    ///
    /// 입력 데이터 자체가 잘못된 경우(order 0, 과목 불일치)에만 에러를 돌려주고,
    /// 정책상 거부는 `allowed=false`인 결과로 돌려줍니다.
    pub fn evaluate(&self, subject: &Subject, content: &ContentItem) -> Result<AccessDecision> {
        if subject.order == 0 {
            return Err(Error::InvalidOrder {
                id: subject.id.clone(),
            });
        }
        if content.order == 0 {
            return Err(Error::InvalidOrder {
                id: content.id.clone(),
            });
        }
        if content.subject_id != subject.id {
            return Err(Error::SubjectMismatch {
                content_id: content.id.clone(),
                expected: subject.id.clone(),
                actual: content.subject_id.clone(),
            });
        }

        let entitlement = self.user.entitlement();
        let allowed = can_access_content(
            self.user.is_premium,
            self.user.role,
            subject.order,
            content.order,
        );

        if allowed {
            Ok(AccessDecision::allow(entitlement))
        } else {
            Ok(AccessDecision::deny(entitlement, "premium subscription required"))
        }
    }

    /// 콘텐츠 접근 인가
    ///
    /// 거부되면 `Error::AccessDenied`를 돌려줍니다.
    pub fn authorize_content(&self, subject: &Subject, content: &ContentItem) -> Result<()> {
        let decision = self.evaluate(subject, content)?;

        if decision.allowed {
            tracing::debug!(
                user = self.user.log_id(),
                subject = %subject.id,
                content = %content.id,
                entitlement = ?decision.entitlement,
                "content access granted"
            );
            return Ok(());
        }

        let reason = decision.reason.unwrap_or_else(|| "access denied".to_string());
        tracing::info!(
            user = self.user.log_id(),
            subject = %subject.id,
            content = %content.id,
            reason = %reason,
            "content access denied"
        );
        Err(Error::AccessDenied { reason })
    }

    /// 과목 목록의 잠금 표시 계산
    pub fn subject_lock_states(&self, subjects: &[Subject]) -> Vec<SubjectLock> {
        subjects
            .iter()
            .map(|subject| SubjectLock {
                subject_id: subject.id.clone(),
                order: subject.order,
                locked: is_subject_premium(
                    subject.order,
                    self.user.role,
                    Some(self.user.is_premium),
                ),
            })
            .collect()
    }
}
