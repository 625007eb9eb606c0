//! Username - the identity key for a birth record.

use crate::{CoreError, Result as CoreErrorResult};

use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const USERNAME_FIELD: &str = "username";

/// A non-empty, purely alphabetic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Parse a raw username, rejecting empty or non-alphabetic input
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        if raw.is_empty() {
            return Err(CoreError::validation(
                USERNAME_FIELD,
                "Invalid username. Username cannot be empty",
            ));
        }

        if !raw.chars().all(char::is_alphabetic) {
            return Err(CoreError::validation(
                USERNAME_FIELD,
                "Invalid username. Please use letters only",
            ));
        }

        Ok(Self(raw.to_string()))
    }

    /// Like `parse`, with an additional upper bound on the character count
    #[track_caller]
    pub fn parse_with_max_length(raw: &str, max_length: usize) -> CoreErrorResult<Self> {
        let username = Self::parse(raw)?;

        if username.0.chars().count() > max_length {
            return Err(CoreError::validation(
                USERNAME_FIELD,
                format!("Invalid username. Must not exceed {} characters", max_length),
            ));
        }

        Ok(username)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Username {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl Deref for Username {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
