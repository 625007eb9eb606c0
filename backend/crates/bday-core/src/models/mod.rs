pub mod birth_record;
pub mod birthday_greeting;
pub mod date_of_birth;
pub mod leap_day_policy;
pub mod username;
