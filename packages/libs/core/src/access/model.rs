//! 정책 평가에 쓰이는 엔티티
//!
//! 이 크레이트는 엔티티를 소유하지 않습니다. 사용자 정보는 인증/결제 시스템이,
//! 과목/콘텐츠 order는 관리자 콘텐츠 관리 도구가 결정합니다.

use serde::{Deserialize, Serialize};

use super::role::{Entitlement, Role};

/// 사용자 접근 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccess {
    /// 사용자 ID (로그 용도)
    #[serde(default)]
    pub id: Option<String>,

    /// Role (없을 수 있음)
    #[serde(default)]
    pub role: Option<Role>,

    /// premium 구독 여부
    #[serde(default, rename = "isPremium", alias = "is_premium")]
    pub is_premium: bool,
}

impl UserAccess {
    /// 새 사용자 정보 생성
    pub fn new(role: Option<Role>, is_premium: bool) -> Self {
        Self {
            id: None,
            role,
            is_premium,
        }
    }

    /// ID 설정
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// 무료 사용자
    pub fn free() -> Self {
        Self::new(Some(Role::User), false)
    }

    /// premium 사용자
    pub fn premium() -> Self {
        Self::new(Some(Role::User), true)
    }

    /// 관리자
    pub fn admin() -> Self {
        Self::new(Some(Role::Admin), false)
    }

    pub fn entitlement(&self) -> Entitlement {
        Entitlement::resolve(self.role, self.is_premium)
    }

    pub(crate) fn log_id(&self) -> &str {
        self.id.as_deref().unwrap_or("anonymous")
    }
}

/// 과목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,

    /// 목록 내 위치 (1부터)
    pub order: u32,
}

impl Subject {
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }
}

/// 콘텐츠 (영상/노트/연습문제)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,

    /// 소속 과목 ID
    #[serde(rename = "subjectId", alias = "subject_id")]
    pub subject_id: String,

    /// 카테고리 (예: video, notes, practice)
    pub category: String,

    /// 카테고리 내 위치 (1부터)
    pub order: u32,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        category: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            category: category.into(),
            order,
        }
    }
}
