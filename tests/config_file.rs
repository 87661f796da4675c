use reasoning_timeline::config::Config;
use reasoning_timeline::error::TimelineError;
use reasoning_timeline::{TimelineView, parse_steps, render_text};
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_from_file_drives_presenter() {
    let path = write_temp(
        "timeline.toml",
        "[presenter]\ninitial_visible_steps = 1\ntruncate_chars = 12\nhighlight = false\n",
    );
    let config = Config::load_from(Some(path.as_path())).unwrap();
    assert_eq!(config.presenter.initial_visible_steps, 1);
    assert_eq!(config.presenter.truncate_chars, 12);
    assert!(!config.presenter.highlight);

    let steps = parse_steps("RSI crossing above 30, bullish\n\nSecond step");
    let view = TimelineView::new(steps, &config.presenter);
    let text = render_text(&view, config.presenter.highlight);
    assert!(text.contains("RSI crossing..."));
    assert!(text.contains("(truncated)"));
    assert!(text.ends_with("+ 1 more step\n"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_invalid_values_rejected() {
    let path = write_temp("zero.toml", "[presenter]\ninitial_visible_steps = 0\n");
    let err = Config::load_from(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, TimelineError::Validation { .. }));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_malformed_toml_is_config_error() {
    let path = write_temp("broken.toml", "[presenter\n");
    let err = Config::load_from(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, TimelineError::Config { .. }));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_explicit_missing_path_is_io_error() {
    let path = std::env::temp_dir().join(format!("{}-does-not-exist.toml", std::process::id()));
    let err = Config::load_from(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, TimelineError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn test_explicit_directory_path_is_io_error() {
    let dir = std::env::temp_dir();
    let err = Config::load_from(Some(dir.as_path())).unwrap_err();
    assert!(matches!(err, TimelineError::Io { .. }));
}
