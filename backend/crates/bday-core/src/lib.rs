pub mod birthday_calculator;
pub mod birthday_service;
pub mod clock;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use birthday_calculator::{BirthdayCalculator, is_leap_year};
pub use birthday_service::{BirthdayService, DEFAULT_MAX_USERNAME_LENGTH};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result};
pub use models::birth_record::BirthRecord;
pub use models::birthday_greeting::BirthdayGreeting;
pub use models::date_of_birth::{
    DATE_FORMAT, DATE_OF_BIRTH_FIELD, ensure_before_today, format_date, parse_date_of_birth,
};
pub use models::leap_day_policy::{LEAP_DAY_POLICY_FIELD, LeapDayPolicy};
pub use models::username::{USERNAME_FIELD, Username};
pub use store::memory_record_store::InMemoryRecordStore;
pub use store::record_store::RecordStore;
