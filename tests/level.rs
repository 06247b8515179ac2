//! Tests for levels and alarm level names.

use gitdoc::log::{AlarmLevel, Color, Level};

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Normal.to_string(), "normal");
}

#[test]
fn level_colors_are_fixed() {
    assert_eq!(Level::Debug.color(), Color::Green);
    assert_eq!(Level::Info.color(), Color::Blue);
    assert_eq!(Level::Warn.color(), Color::Yellow);
    assert_eq!(Level::Error.color(), Color::Red);
    assert_eq!(Level::Trace.color(), Color::None);
    assert_eq!(Level::Normal.color(), Color::None);
}

#[test]
fn alarm_level_names() {
    assert_eq!(AlarmLevel::from("Warn"), AlarmLevel::Warn);
    assert_eq!(AlarmLevel::from("warning"), AlarmLevel::Warn);
    assert_eq!(AlarmLevel::from("Debug"), AlarmLevel::Debug);
    assert_eq!(AlarmLevel::from("ERROR"), AlarmLevel::Error);
    assert_eq!(AlarmLevel::from(" error "), AlarmLevel::Error);
}

#[test]
fn alarm_level_falls_back_to_info() {
    assert_eq!(AlarmLevel::from("Info"), AlarmLevel::Info);
    assert_eq!(AlarmLevel::from(""), AlarmLevel::Info);
    assert_eq!(AlarmLevel::from("trace"), AlarmLevel::Info);
    assert_eq!(AlarmLevel::default(), AlarmLevel::Info);
}

#[test]
fn alarm_level_maps_to_level() {
    assert_eq!(AlarmLevel::Error.level(), Level::Error);
    assert_eq!(AlarmLevel::Warn.to_string(), "warn");
}
