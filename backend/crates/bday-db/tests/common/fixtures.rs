use bday_core::{BirthRecord, Username};

use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn username(name: &str) -> Username {
    Username::parse(name).expect("valid test username")
}

/// Creates a BirthRecord for `name` born on the given date
pub fn create_test_record(name: &str, year: i32, month: u32, day: u32) -> BirthRecord {
    BirthRecord::new(username(name), date(year, month, day))
}
