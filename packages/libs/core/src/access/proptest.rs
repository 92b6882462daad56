//! 접근 정책 property 테스트
//!
//! 판정 함수의 법칙을 임의 입력으로 확인합니다.

use proptest::prelude::*;

use super::{
    can_access_content, is_first_content, is_first_subject, is_subject_premium, AccessGuard,
    ContentItem, Role, Subject, UserAccess,
};
use crate::error::Error;

fn arb_role() -> impl Strategy<Value = Option<Role>> {
    prop_oneof![
        Just(None),
        Just(Some(Role::Admin)),
        Just(Some(Role::SuperAdmin)),
        Just(Some(Role::User)),
    ]
}

fn arb_non_admin_role() -> impl Strategy<Value = Option<Role>> {
    prop_oneof![Just(None), Just(Some(Role::SuperAdmin)), Just(Some(Role::User))]
}

fn arb_order() -> impl Strategy<Value = u32> {
    1u32..1_000
}

/// 적어도 한쪽이 0인 (subject_order, content_order)
fn arb_orders_with_zero() -> impl Strategy<Value = (u32, u32)> {
    prop_oneof![
        (Just(0u32), 0u32..1_000),
        (1u32..1_000, Just(0u32)),
    ]
}

proptest! {
    #[test]
    fn admin_can_access_everything(
        is_premium in any::<bool>(),
        subject_order in arb_order(),
        content_order in arb_order(),
    ) {
        prop_assert!(can_access_content(is_premium, Some(Role::Admin), subject_order, content_order));
    }

    #[test]
    fn premium_can_access_everything(
        role in arb_non_admin_role(),
        subject_order in arb_order(),
        content_order in arb_order(),
    ) {
        prop_assert!(can_access_content(true, role, subject_order, content_order));
    }

    #[test]
    fn free_user_only_first_of_first(
        role in arb_non_admin_role(),
        subject_order in arb_order(),
        content_order in arb_order(),
    ) {
        let expected = subject_order == 1 && content_order == 1;
        prop_assert_eq!(can_access_content(false, role, subject_order, content_order), expected);
    }

    #[test]
    fn free_access_implies_first_positions(
        role in arb_non_admin_role(),
        subject_order in arb_order(),
        content_order in arb_order(),
    ) {
        if can_access_content(false, role, subject_order, content_order) {
            prop_assert!(is_first_subject(subject_order));
            prop_assert!(is_first_content(content_order));
        }
    }

    #[test]
    fn lock_shown_only_for_restricted_non_first(
        role in arb_role(),
        is_premium in proptest::option::of(any::<bool>()),
        subject_order in arb_order(),
    ) {
        let unrestricted = role == Some(Role::Admin) || is_premium == Some(true);
        let expected = !unrestricted && subject_order != 1;
        prop_assert_eq!(is_subject_premium(subject_order, role, is_premium), expected);
    }

    #[test]
    fn unlocked_subject_first_content_is_accessible(
        role in arb_role(),
        is_premium in any::<bool>(),
        subject_order in arb_order(),
    ) {
        if !is_subject_premium(subject_order, role, Some(is_premium)) {
            prop_assert!(can_access_content(is_premium, role, subject_order, 1));
        }
    }

    #[test]
    fn predicates_are_deterministic(
        role in arb_role(),
        is_premium in any::<bool>(),
        subject_order in arb_order(),
        content_order in arb_order(),
    ) {
        let first = can_access_content(is_premium, role, subject_order, content_order);
        for _ in 0..5 {
            prop_assert_eq!(can_access_content(is_premium, role, subject_order, content_order), first);
        }

        let lock = is_subject_premium(subject_order, role, Some(is_premium));
        prop_assert_eq!(is_subject_premium(subject_order, role, Some(is_premium)), lock);
    }

    #[test]
    fn guard_agrees_with_predicate(
        role in arb_role(),
        is_premium in any::<bool>(),
        subject_order in arb_order(),
        content_order in arb_order(),
    ) {
        let user = UserAccess::new(role, is_premium);
        let subject = Subject::new("subject", subject_order);
        let content = ContentItem::new("content", "subject", "video", content_order);

        let guarded = AccessGuard::new(&user).authorize_content(&subject, &content).is_ok();
        prop_assert_eq!(guarded, can_access_content(is_premium, role, subject_order, content_order));
    }

    #[test]
    fn guard_rejects_zero_order_for_any_user(
        role in arb_role(),
        is_premium in any::<bool>(),
        (subject_order, content_order) in arb_orders_with_zero(),
    ) {
        let user = UserAccess::new(role, is_premium);
        let subject = Subject::new("subject", subject_order);
        let content = ContentItem::new("content", "subject", "video", content_order);

        let result = AccessGuard::new(&user).authorize_content(&subject, &content);
        prop_assert!(
            matches!(result, Err(Error::InvalidOrder { .. })),
            "expected Err(Error::InvalidOrder), got {:?}",
            result
        );
    }
}
