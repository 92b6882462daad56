//! 콘텐츠 접근 정책
//!
//! # 개요
//!
//! 무료 사용자는 첫 번째 과목의 첫 번째 콘텐츠만 볼 수 있고,
//! premium 사용자와 admin은 모든 콘텐츠를 볼 수 있습니다.
//!
//! 판정 함수는 서버의 인가 검사와 클라이언트의 잠금 아이콘 표시 양쪽에서
//! 쓰입니다. 클라이언트 결과는 표시용일 뿐이며, 서버는 항상 [`AccessGuard`]로
//! 다시 판정합니다.
//!
//! # 모듈 구조
//!
//! - `role`: Role enum 및 접근 등급
//! - `model`: 사용자/과목/콘텐츠 입력 타입
//! - `policy`: 순수 판정 함수
//! - `guard`: 서버 측 인가 가드
//! - `listing`: 목록 order 불변식 검증

mod guard;
mod listing;
mod model;
mod policy;
mod role;

pub use guard::{AccessDecision, AccessGuard, SubjectLock};
pub use listing::{validate_content_listing, validate_subject_listing};
pub use model::{ContentItem, Subject, UserAccess};
pub use policy::{
    can_access_content, is_first_content, is_first_subject, is_subject_premium, FREE_ORDER,
};
pub use role::{Entitlement, Role};

#[cfg(test)]
mod proptest;
