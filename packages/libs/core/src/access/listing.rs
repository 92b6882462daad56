//! 과목/콘텐츠 목록 order 검증
//!
//! 정책은 "order 1 = 무료"에 기대므로, 관리 도구가 저장하기 전에
//! 목록 단위 불변식을 확인합니다.
//!
//! - 모든 order >= 1
//! - order 중복 없음
//! - order 1이 정확히 하나

use std::collections::{BTreeMap, HashSet};

use super::model::{ContentItem, Subject};
use super::policy::FREE_ORDER;
use crate::error::{Error, Result};

/// 과목 목록 검증
pub fn validate_subject_listing(subjects: &[Subject]) -> Result<()> {
    validate_orders(
        "subjects",
        subjects.iter().map(|s| (s.id.as_str(), s.order)),
    )
}

/// 콘텐츠 목록 검증 ((과목, 카테고리) 그룹별)
pub fn validate_content_listing(items: &[ContentItem]) -> Result<()> {
    let mut groups: BTreeMap<(&str, &str), Vec<&ContentItem>> = BTreeMap::new();
    for item in items {
        groups
            .entry((item.subject_id.as_str(), item.category.as_str()))
            .or_default()
            .push(item);
    }

    for ((subject_id, category), group) in groups {
        let scope = format!("subject '{}' category '{}'", subject_id, category);
        validate_orders(&scope, group.iter().map(|i| (i.id.as_str(), i.order)))?;
    }

    Ok(())
}

fn validate_orders<'a>(scope: &str, entries: impl Iterator<Item = (&'a str, u32)>) -> Result<()> {
    let mut seen = HashSet::new();

    for (id, order) in entries {
        if order == 0 {
            return Err(Error::InvalidOrder { id: id.to_string() });
        }
        if !seen.insert(order) {
            return Err(Error::DuplicateOrder {
                scope: scope.to_string(),
                order,
            });
        }
    }

    if !seen.contains(&FREE_ORDER) {
        return Err(Error::MissingFreeItem {
            scope: scope.to_string(),
        });
    }

    Ok(())
}
