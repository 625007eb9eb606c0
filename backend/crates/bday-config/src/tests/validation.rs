use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("BDAY_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("BDAY_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_database_path_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("BDAY_DATABASE_PATH", "../../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("BDAY_DATABASE_PATH", "/tmp/hello.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_database_max_connections_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("BDAY_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

// =========================================================================
// Validation Tests - Input Limits
// =========================================================================

#[test]
#[serial]
fn given_username_limit_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("BDAY_VALIDATION_MAX_USERNAME_LENGTH", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("max_username_length"));
}

#[test]
#[serial]
fn given_username_limit_at_maximum_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("BDAY_VALIDATION_MAX_USERNAME_LENGTH", "255");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}
