//! Write and read paths over an injected store and clock.

use crate::{
    BirthRecord, BirthdayCalculator, BirthdayGreeting, Clock, CoreError, RecordStore,
    Result as CoreErrorResult, Username, ensure_before_today, parse_date_of_birth,
};

use std::sync::Arc;

use log::debug;

pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 64;

#[derive(Clone)]
pub struct BirthdayService {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    calculator: BirthdayCalculator,
    max_username_length: usize,
}

impl BirthdayService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
        calculator: BirthdayCalculator,
    ) -> Self {
        Self {
            store,
            clock,
            calculator,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
        }
    }

    pub fn with_max_username_length(mut self, max_username_length: usize) -> Self {
        self.max_username_length = max_username_length;
        self
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Validate and store a date of birth, replacing any previous one.
    ///
    /// Checks run in order: date format, username, then date strictly
    /// before today. Nothing is written unless all three pass.
    pub async fn save_date_of_birth(
        &self,
        raw_username: &str,
        raw_date_of_birth: &str,
    ) -> CoreErrorResult<BirthRecord> {
        let date_of_birth = parse_date_of_birth(raw_date_of_birth)?;
        let username = Username::parse_with_max_length(raw_username, self.max_username_length)?;
        ensure_before_today(date_of_birth, self.clock.today())?;

        let record = BirthRecord::new(username, date_of_birth);
        self.store.upsert(&record).await?;

        debug!("Saved date of birth for {}", record.username);
        Ok(record)
    }

    /// Days until the stored user's next birthday.
    ///
    /// A name that could never have been stored is reported as not found.
    pub async fn greet(&self, raw_username: &str) -> CoreErrorResult<BirthdayGreeting> {
        let username =
            Username::parse(raw_username).map_err(|_| CoreError::not_found(raw_username))?;

        let record = self
            .store
            .lookup(&username)
            .await?
            .ok_or_else(|| CoreError::not_found(raw_username))?;

        let greeting = self
            .calculator
            .greeting(record.date_of_birth, self.clock.today());

        debug!("{} is {} day(s) from a birthday", username, greeting.days());
        Ok(greeting)
    }
}
