use crate::BirthdayConfig;

use bday_core::LeapDayPolicy;

#[test]
fn test_birthday_config_default_policy() {
    assert_eq!(
        BirthdayConfig::default().leap_day_policy,
        LeapDayPolicy::Feb28
    );
}

#[test]
fn test_birthday_config_deserializes_policy_names() {
    let config: BirthdayConfig = toml::from_str(r#"leap_day_policy = "mar1""#).unwrap();
    assert_eq!(config.leap_day_policy, LeapDayPolicy::Mar1);

    let config: BirthdayConfig = toml::from_str("").unwrap();
    assert_eq!(config.leap_day_policy, LeapDayPolicy::Feb28);
}
