//! Checklist settings: how groups are named and how many there are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GroupCheckError;

/// Smallest group count the front end accepts.
pub const MIN_GROUP_COUNT: u32 = 1;

/// Largest group count the front end accepts.
pub const MAX_GROUP_COUNT: u32 = 30;

/// Group count used when no snapshot exists.
pub const DEFAULT_GROUP_COUNT: u32 = 12;

/// Naming scheme for groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupType {
    /// `1`, `2`, `3`, ...
    #[default]
    #[serde(rename = "number")]
    Numeric,
    /// `A`, `B`, ..., `Z`, `AA`, `AB`, ...
    #[serde(rename = "alphabet")]
    Alphabetic,
}

impl GroupType {
    /// The persisted spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "number",
            Self::Alphabetic => "alphabet",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupType {
    type Err = GroupCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "number" | "numeric" => Ok(Self::Numeric),
            "alphabet" | "alphabetic" => Ok(Self::Alphabetic),
            _ => Err(GroupCheckError::InvalidGroupType {
                value: s.to_string(),
            }),
        }
    }
}

/// The settings pair applied together by `update_settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub group_type: GroupType,
    pub group_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            group_type: GroupType::Numeric,
            group_count: DEFAULT_GROUP_COUNT,
        }
    }
}

/// Outcome of checking a user-entered group count against the allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInput {
    /// Within range; use as-is.
    Accepted(u32),
    /// Above the maximum; clamped down to it.
    Clamped(u32),
    /// Below the minimum; the request should be ignored.
    TooSmall,
}

/// Clamp a requested group count to `MIN_GROUP_COUNT..=MAX_GROUP_COUNT`.
///
/// The store trusts whatever count it is given, so front ends run input
/// through this first.
pub fn clamp_group_count(requested: i64) -> CountInput {
    if requested < i64::from(MIN_GROUP_COUNT) {
        CountInput::TooSmall
    } else if requested > i64::from(MAX_GROUP_COUNT) {
        CountInput::Clamped(MAX_GROUP_COUNT)
    } else {
        CountInput::Accepted(requested as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_twelve_numeric_groups() {
        let settings = Settings::default();
        assert_eq!(settings.group_type, GroupType::Numeric);
        assert_eq!(settings.group_count, 12);
    }

    #[test]
    fn group_type_parses_both_spellings() {
        assert_eq!("number".parse::<GroupType>().unwrap(), GroupType::Numeric);
        assert_eq!("Numeric".parse::<GroupType>().unwrap(), GroupType::Numeric);
        assert_eq!(
            "alphabet".parse::<GroupType>().unwrap(),
            GroupType::Alphabetic
        );
        assert_eq!(
            " ALPHABETIC ".parse::<GroupType>().unwrap(),
            GroupType::Alphabetic
        );
    }

    #[test]
    fn group_type_rejects_unknown() {
        let err = "roman".parse::<GroupType>().unwrap_err();
        assert!(matches!(err, GroupCheckError::InvalidGroupType { .. }));
    }

    #[test]
    fn group_type_serializes_as_persisted_strings() {
        assert_eq!(
            serde_json::to_string(&GroupType::Numeric).unwrap(),
            "\"number\""
        );
        assert_eq!(
            serde_json::to_string(&GroupType::Alphabetic).unwrap(),
            "\"alphabet\""
        );
    }

    #[test]
    fn group_type_display_matches_persisted_form() {
        assert_eq!(GroupType::Alphabetic.to_string(), "alphabet");
    }

    #[test]
    fn clamp_accepts_range_bounds() {
        assert_eq!(clamp_group_count(1), CountInput::Accepted(1));
        assert_eq!(clamp_group_count(30), CountInput::Accepted(30));
    }

    #[test]
    fn clamp_caps_large_counts() {
        assert_eq!(clamp_group_count(31), CountInput::Clamped(30));
        assert_eq!(clamp_group_count(1000), CountInput::Clamped(30));
    }

    #[test]
    fn clamp_rejects_zero_and_negative() {
        assert_eq!(clamp_group_count(0), CountInput::TooSmall);
        assert_eq!(clamp_group_count(-4), CountInput::TooSmall);
    }
}
