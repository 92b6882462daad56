//! Role 및 권한 등급 정의
//!
//! 인증 시스템이 내려주는 role 문자열은 경계에서 한 번만 파싱되고,
//! 이후에는 닫힌 enum으로만 다룹니다. 오타가 난 role 문자열이
//! 조용히 무료 사용자로 처리되는 일을 막기 위함입니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 사용자 Role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// 관리자 - 모든 콘텐츠 접근 가능
    Admin,

    /// 슈퍼 관리자 - 운영 도구 전용, 콘텐츠 접근은 일반 규칙을 따름
    SuperAdmin,

    /// 일반 사용자
    User,
}

impl Role {
    /// 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
            Role::User => "user",
        }
    }

    /// admin 여부
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Option<&str> role에서 파싱 (None = role 없음)
    pub fn parse_optional(role: Option<&str>) -> Result<Option<Self>> {
        role.map(str::parse).transpose()
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::SuperAdmin),
            "user" => Ok(Role::User),
            other => Err(Error::UnknownRole {
                role: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// 콘텐츠 접근 등급
///
/// `(role, is_premium)` 조합을 정책 관점의 세 가지 등급으로 접습니다.
/// admin이 premium보다 우선합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entitlement {
    Admin,
    Premium,
    Free,
}

impl Entitlement {
    /// role과 premium 여부에서 등급 결정
    pub fn resolve(role: Option<Role>, is_premium: bool) -> Self {
        match role {
            Some(Role::Admin) => Entitlement::Admin,
            _ if is_premium => Entitlement::Premium,
            _ => Entitlement::Free,
        }
    }

    /// 모든 콘텐츠를 제한 없이 볼 수 있는지
    pub fn is_unrestricted(&self) -> bool {
        !matches!(self, Entitlement::Free)
    }
}
