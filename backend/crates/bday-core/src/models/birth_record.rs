//! Birth record entity - the only persisted state.

use crate::Username;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The current date of birth for one username.
/// Replaced wholesale on every upsert; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub username: Username,
    pub date_of_birth: NaiveDate,
}

impl BirthRecord {
    pub fn new(username: Username, date_of_birth: NaiveDate) -> Self {
        Self {
            username,
            date_of_birth,
        }
    }
}
