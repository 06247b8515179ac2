//! Tests for the process-wide default printer and its module-level helpers.
//!
//! All tests here swap the default printer, so they serialize on `LOCK`.

use gitdoc::log::{self, BASE_CALL_DEPTH, Color, MemorySink, Printer};
use regex::Regex;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static LOCK: Mutex<()> = Mutex::new(());

fn install(printer: &Printer) -> (Arc<MemorySink>, MutexGuard<'static, ()>) {
    let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let sink = Arc::new(MemorySink::new());
    log::set_default(printer.with_sink(sink.clone()));
    (sink, guard)
}

fn emit_all() {
    log::trace(format_args!("123{}", 4));
    log::warn(format_args!("123{}", 4));
    log::info(format_args!("123{}", 4));
    log::error(format_args!("123{}", 4));
    log::debug(format_args!("123{}", 4));
    log::normal(format_args!("123{}", 4));
}

#[test]
fn module_functions_skip_trace_when_disabled() {
    let (sink, _guard) = install(&Printer::new().with_disable_color());
    emit_all();
    assert_eq!(sink.count(), 5);
    assert!(sink.lines().iter().all(|l| l == "1234\n"));
}

#[test]
fn module_functions_emit_trace_when_enabled() {
    let (sink, _guard) = install(&Printer::new().with_disable_color());
    log::configure(|o| o.enable_trace = true);
    emit_all();
    assert_eq!(sink.count(), 6);

    let re = Regex::new(r"^\d{2}:\d{2}:\d{2} global\.rs:\d+ 1234\n$").unwrap();
    for line in sink.lines() {
        assert!(re.is_match(&line), "got {line:?}");
    }
}

#[test]
fn macros_attribute_the_real_caller() {
    let (sink, _guard) = install(&Printer::new().with_disable_color().with_enable_trace());
    gitdoc::info!("x={}", 1);
    let line = line!() - 1;
    log::debug(format_args!("y"));
    let line2 = line!() - 1;

    let lines = sink.lines();
    assert!(lines[0].ends_with(&format!(" global.rs:{line} x=1\n")), "{lines:?}");
    assert!(lines[1].ends_with(&format!(" global.rs:{line2} y\n")), "{lines:?}");
}

#[test]
fn configure_does_not_touch_earlier_snapshots() {
    let (_sink, _guard) = install(&Printer::new());
    let before = log::default_std();
    log::configure(|o| o.prefix = "late".to_string());

    assert_eq!(before.options().prefix, "");
    assert_eq!(log::default_std().options().prefix, "late");
}

#[test]
fn prefix_and_inline_derive_from_default() {
    let (sink, _guard) = install(&Printer::new().with_disable_color());

    log::prefix("step1").info(format_args!("ok"));
    log::inline().debug(format_args!("123"));
    assert_eq!(sink.lines(), vec!["[step1]ok\n", "123"]);

    assert_eq!(log::default_std().options().prefix, "");
    assert!(!log::default_std().options().enable_inline);
}

#[test]
fn default_depth_is_baseline() {
    let (_sink, _guard) = install(&Printer::new());
    assert_eq!(log::default_std().call_depth(), BASE_CALL_DEPTH);
    assert_eq!(log::default_std().with_add_call_depth(1).call_depth(), 4);
}

#[test]
fn alarm_through_default() {
    let (sink, _guard) = install(&Printer::new().with_disable_color());
    assert!(log::alarm("Warn", "Warn").is_ok());
    let err = log::alarm("Error", "Error").unwrap_err();
    assert_eq!(err.to_string(), "Error");
    assert_eq!(sink.lines(), vec!["Warn\n", "Error\n"]);
}

#[test]
fn color_helpers_follow_default_color_setting() {
    let (_sink, _guard) = install(&Printer::new());
    log::configure(|o| o.disable_color = false);
    assert_eq!(log::color(Color::Blue, format_args!("a")), "\x1b[0;34ma\x1b[0m");
    assert_eq!(
        log::strings_join(Color::Yellow, &["a", "b"], " "),
        "\x1b[0;33ma\x1b[0m \x1b[0;33mb\x1b[0m"
    );

    log::configure(|o| o.disable_color = true);
    assert_eq!(log::color(Color::Blue, format_args!("a")), "a");
    assert_eq!(log::strings_join(Color::Yellow, &["a", "b"], " "), "a b");
}
