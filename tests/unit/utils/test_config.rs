use petfinder_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn get_env_or_default_parses_a_set_variable() {
    unsafe {
        env::set_var("PF_TEST_PARSES", "42");
    }
    let value: u32 = get_env_or_default("PF_TEST_PARSES", 7);
    assert_eq!(value, 42);
    unsafe {
        env::remove_var("PF_TEST_PARSES");
    }
}

#[test]
fn get_env_or_default_falls_back_when_unset() {
    let value: u32 = get_env_or_default("PF_TEST_DEFINITELY_UNSET", 7);
    assert_eq!(value, 7);
}

#[test]
fn get_env_or_default_falls_back_on_parse_failure() {
    unsafe {
        env::set_var("PF_TEST_UNPARSEABLE", "not-a-number");
    }
    let value: u32 = get_env_or_default("PF_TEST_UNPARSEABLE", 7);
    assert_eq!(value, 7);
    unsafe {
        env::remove_var("PF_TEST_UNPARSEABLE");
    }
}

#[test]
fn get_env_or_none_returns_none_when_unset() {
    let value: Option<u32> = get_env_or_none("PF_TEST_ALSO_UNSET");
    assert!(value.is_none());
}

#[test]
fn get_env_or_none_parses_strings() {
    unsafe {
        env::set_var("PF_TEST_STRING", "hello");
    }
    let value: Option<String> = get_env_or_none("PF_TEST_STRING");
    assert_eq!(value.as_deref(), Some("hello"));
    unsafe {
        env::remove_var("PF_TEST_STRING");
    }
}
