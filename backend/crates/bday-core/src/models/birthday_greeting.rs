use serde::Serialize;

/// Outcome of a countdown query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum BirthdayGreeting {
    Today,
    InDays(u32),
}

impl BirthdayGreeting {
    pub fn from_days(days: u32) -> Self {
        if days == 0 {
            Self::Today
        } else {
            Self::InDays(days)
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            Self::Today => 0,
            Self::InDays(days) => *days,
        }
    }

    /// Human-readable message addressed to `username`
    pub fn message(&self, username: &str) -> String {
        match self {
            Self::Today => format!("Hello, {}! Happy birthday!", username),
            Self::InDays(days) => {
                format!("Hello, {}! Your birthday is in {} day(s)", username, days)
            }
        }
    }
}
