//! 콘텐츠 접근 정책 판정
//!
//! 순수 함수만 있습니다. 상태도, 부수 효과도, 에러도 없습니다.
//!
//! # 규칙
//!
//! - admin은 항상 허용
//! - premium 사용자는 항상 허용
//! - 그 외에는 첫 번째 과목(order 1)의 첫 번째 콘텐츠(order 1)만 허용
//!
//! order는 1부터 시작합니다. 0은 호출자 계약 위반이며, 판정 함수는
//! 단순히 1과 비교할 뿐입니다. 서버 측에서는 [`AccessGuard`](super::AccessGuard)가
//! 0을 에러로 거부합니다.

use super::role::{Entitlement, Role};

/// 무료로 공개되는 위치
pub const FREE_ORDER: u32 = 1;

/// 콘텐츠 접근 가능 여부
///
/// 클라이언트에서는 잠금 아이콘 표시용 참고값일 뿐입니다.
/// 보호된 콘텐츠를 내보내기 전에 서버에서 반드시 다시 평가해야 하며,
/// 클라이언트가 계산한 결과를 인가 판단으로 신뢰하면 안 됩니다.
pub fn can_access_content(
    is_premium: bool,
    role: Option<Role>,
    subject_order: u32,
    content_order: u32,
) -> bool {
    if Entitlement::resolve(role, is_premium).is_unrestricted() {
        return true;
    }

    is_first_subject(subject_order) && is_first_content(content_order)
}

/// 첫 번째(무료) 과목인지
pub fn is_first_subject(subject_order: u32) -> bool {
    subject_order == FREE_ORDER
}

/// 카테고리 내 첫 번째(무료) 콘텐츠인지
pub fn is_first_content(content_order: u32) -> bool {
    content_order == FREE_ORDER
}

/// 과목에 premium 잠금 표시를 할지
///
/// `is_premium`이 `None`이면 (아직 로드되지 않은 사용자) 무료 사용자로 취급합니다.
pub fn is_subject_premium(subject_order: u32, role: Option<Role>, is_premium: Option<bool>) -> bool {
    if Entitlement::resolve(role, is_premium.unwrap_or(false)).is_unrestricted() {
        return false;
    }

    !is_first_subject(subject_order)
}
