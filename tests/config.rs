//! Tests for config parsing and defaults.

use gitdoc::Config;
use gitdoc::log::AlarmLevel;
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_file_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.convert.converter, "pandoc");
    assert_eq!(config.convert.extensions, vec!["doc", "docx"]);
    assert_eq!(config.init.installer, vec!["brew", "install"]);
    assert!(config.log.color);
    assert!(!config.log.trace);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[log]
trace = true
prefix = "doc"

[convert]
extensions = [".docx"]
on_failure = "warn"

[git]
remote = "origin"
"#,
    )
    .unwrap();

    assert!(config.log.trace);
    assert!(config.log.color);
    assert_eq!(config.log.prefix, "doc");
    assert_eq!(config.convert.extensions, vec![".docx"]);
    assert_eq!(config.convert.converter, "pandoc");
    assert_eq!(config.convert.failure_level(), AlarmLevel::Warn);
    assert_eq!(config.git.remote, "origin");
    assert_eq!(config.git.branch, "");
}

#[test]
fn printer_options_follow_log_section() {
    let config: Config = toml::from_str(
        r#"
[log]
trace = true
color = false
prefix = "x"
"#,
    )
    .unwrap();

    let options = config.printer_options();
    assert!(options.enable_trace);
    assert!(options.disable_color);
    assert_eq!(options.prefix, "x");
    assert!(!options.enable_inline);
}

#[test]
fn load_from_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gitdoc.toml");
    fs::write(&path, "[convert]\nconverter = \"/opt/pandoc\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.convert.converter, "/opt/pandoc");
}

#[test]
fn load_from_rejects_bad_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[log\ntrace = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, gitdoc::Error::ConfigParse(_)));
}

#[test]
fn load_ignores_broken_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "not = [valid").unwrap();

    assert_eq!(Config::load(Some(path.as_path())), Config::default());
}

#[test]
fn load_uses_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ok.toml");
    fs::write(&path, "[git]\nbranch = \"main\"\n").unwrap();

    assert_eq!(Config::load(Some(path.as_path())).git.branch, "main");
}

#[test]
fn tilde_paths_are_expanded() {
    let config: Config = toml::from_str("[convert]\nroot = \"~/docs\"\n").unwrap();
    let root = config.convert.root_path();
    assert!(!root.to_string_lossy().starts_with('~'));
    assert!(root.ends_with("docs"));
}
