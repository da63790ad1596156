use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_in_any_case_when_parsed_then_matches() {
    assert_that!(LogLevel::from_str("DEBUG").unwrap(), eq(LogLevel(LevelFilter::Debug)));
    assert_that!(LogLevel::from_str(" warn ").unwrap(), eq(LogLevel(LevelFilter::Warn)));
    assert_that!(LogLevel::from_str("off").unwrap(), eq(LogLevel(LevelFilter::Off)));
}

#[test]
fn given_unknown_level_when_parsed_then_info() {
    assert_that!(LogLevel::from_str("chatty").unwrap(), eq(LogLevel(LevelFilter::Info)));
}

#[test]
fn given_numeric_level_in_toml_when_deserialized_then_info() {
    #[derive(serde::Deserialize)]
    struct Holder {
        level: LogLevel,
    }

    let holder: Holder = toml::from_str("level = 3").unwrap();

    assert_that!(holder.level, eq(LogLevel(LevelFilter::Info)));
}
