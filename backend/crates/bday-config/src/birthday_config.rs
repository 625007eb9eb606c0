use bday_core::LeapDayPolicy;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BirthdayConfig {
    /// Where Feb 29 birthdays are observed in common years
    pub leap_day_policy: LeapDayPolicy,
}
