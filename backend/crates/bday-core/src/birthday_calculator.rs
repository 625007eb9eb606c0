//! Countdown to the next birthday.
//!
//! All functions here are pure: "today" is always a parameter, never read
//! from the system clock.

use crate::{BirthdayGreeting, LeapDayPolicy};

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthdayCalculator {
    policy: LeapDayPolicy,
}

impl BirthdayCalculator {
    pub fn new(policy: LeapDayPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LeapDayPolicy {
        self.policy
    }

    /// The birthday as observed in `year`.
    ///
    /// Feb 29 births fall back to the policy's substitute in common years.
    /// Returns `None` only when `year` is outside chrono's representable range.
    pub fn anniversary_in(&self, date_of_birth: NaiveDate, year: i32) -> Option<NaiveDate> {
        let (month, day) = if is_leap_day(date_of_birth) && !is_leap_year(year) {
            self.policy.substitute()
        } else {
            (date_of_birth.month(), date_of_birth.day())
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// First anniversary on or after `today`
    pub fn next_anniversary(&self, date_of_birth: NaiveDate, today: NaiveDate) -> NaiveDate {
        match self.anniversary_in(date_of_birth, today.year()) {
            Some(candidate) if candidate >= today => candidate,
            _ => self
                .anniversary_in(date_of_birth, today.year() + 1)
                // Only reachable at chrono's upper year bound
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whole days from `today` to the next anniversary; 0 on the birthday itself
    pub fn days_until_next(&self, date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
        let candidate = self.next_anniversary(date_of_birth, today);

        if candidate == today {
            return 0;
        }

        u32::try_from(candidate.signed_duration_since(today).num_days()).unwrap_or_default()
    }

    pub fn greeting(&self, date_of_birth: NaiveDate, today: NaiveDate) -> BirthdayGreeting {
        BirthdayGreeting::from_days(self.days_until_next(date_of_birth, today))
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn is_leap_day(date: NaiveDate) -> bool {
    date.month() == 2 && date.day() == 29
}
