use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const LEAP_DAY_POLICY_FIELD: &str = "leap_day_policy";

/// Where a Feb 29 birthday lands in a common year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    /// Observe on the last day of February
    #[default]
    Feb28,
    /// Observe on the day after February ends
    Mar1,
}

impl LeapDayPolicy {
    /// (month, day) substituted for Feb 29 in a common year
    pub fn substitute(&self) -> (u32, u32) {
        match self {
            Self::Feb28 => (2, 28),
            Self::Mar1 => (3, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feb28 => "feb28",
            Self::Mar1 => "mar1",
        }
    }
}

impl FromStr for LeapDayPolicy {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "feb28" => Ok(Self::Feb28),
            "mar1" => Ok(Self::Mar1),
            _ => Err(CoreError::validation(
                LEAP_DAY_POLICY_FIELD,
                format!("Invalid leap day policy: {}. Use feb28 or mar1", s),
            )),
        }
    }
}

impl std::fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
