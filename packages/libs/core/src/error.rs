//! 공통 에러 타입
//!
//! bimbel-core 전체에서 사용되는 에러 타입을 정의합니다.
//! 접근 정책 판정 함수(`access::can_access_content` 등)는 실패하지 않으며,
//! 이 타입은 가드, 목록 검증, Rate Limit, 설정 로드에서만 사용됩니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// bimbel-core 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Access Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("access denied: {reason}")]
    AccessDenied { reason: String },

    #[error("content '{content_id}' belongs to subject '{actual}', not '{expected}'")]
    SubjectMismatch {
        content_id: String,
        expected: String,
        actual: String,
    },

    #[error("unknown role: {role}")]
    UnknownRole { role: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Listing Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("invalid order for '{id}': orders start at 1")]
    InvalidOrder { id: String },

    #[error("duplicate order {order} in {scope}")]
    DuplicateOrder { scope: String, order: u32 },

    #[error("no free item (order 1) in {scope}")]
    MissingFreeItem { scope: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Rate Limit Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("rate limit exceeded for '{key}', retry after {retry_after_secs}s")]
    RateLimited { key: String, retry_after_secs: u64 },

    // ─────────────────────────────────────────────────────────────────────────────
    // Config/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("config error: {message}")]
    Config { message: String },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Error::SubjectMismatch { .. }
            | Error::UnknownRole { .. }
            | Error::InvalidOrder { .. }
            | Error::DuplicateOrder { .. }
            | Error::MissingFreeItem { .. }
            | Error::Yaml(_) => 400,

            // 403 Forbidden
            Error::AccessDenied { .. } => 403,

            // 429 Too Many Requests
            Error::RateLimited { .. } => 429,

            // 500 Internal Server Error
            Error::Config { .. } => 500,
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::AccessDenied { .. } => "ACCESS_DENIED",
            Error::SubjectMismatch { .. } => "SUBJECT_MISMATCH",
            Error::UnknownRole { .. } => "UNKNOWN_ROLE",
            Error::InvalidOrder { .. } => "INVALID_ORDER",
            Error::DuplicateOrder { .. } => "DUPLICATE_ORDER",
            Error::MissingFreeItem { .. } => "MISSING_FREE_ITEM",
            Error::RateLimited { .. } => "RATE_LIMITED",
            Error::Config { .. } => "CONFIG_ERROR",
            Error::Yaml(_) => "YAML_ERROR",
        }
    }
}
