//! Integration tests for Settings layered loading
//!
//! These tests run without a global config (temp directories only),
//! so they test local/explicit files merging over compiled defaults.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use hrdiagram::application::ApplicationError;
use hrdiagram::config::{local_config_path, RendererKind, Settings};
use hrdiagram::domain::PlotGeometry;

#[test]
fn given_local_config_when_load_then_overrides_only_given_keys() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
[animation]
step_interval_ms = 500

[picker]
radius = 35.0

[output]
renderer = "terminal"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert: overridden
    assert_eq!(settings.animation.step_interval(), Duration::from_millis(500));
    assert_eq!(settings.picker.radius, 35.0);
    assert_eq!(settings.output.renderer, RendererKind::Terminal);
    // Assert: untouched keys keep defaults
    assert_eq!(settings.plot, PlotGeometry::default());
    assert_eq!(settings.animation.pulse.base_radius, 8.0);
    assert_eq!(settings.output.svg_path, PathBuf::from("hr-diagram.svg"));
}

#[test]
fn given_dir_without_config_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_explicit_file_when_load_from_then_applies_it() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("custom.toml");
    fs::write(
        &file,
        r#"
[plot]
min_temperature = 2500.0
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&file).expect("load settings");

    assert_eq!(settings.plot.min_temperature, 2500.0);
    assert_eq!(settings.plot.max_temperature, 30000.0);
}

#[test]
fn given_missing_explicit_file_when_load_from_then_config_error() {
    let dir = TempDir::new().unwrap();

    let result = Settings::load_from(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_renderer_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "[output]\nrenderer = \"plotter\"\n",
    )
    .unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_home_relative_svg_path_when_load_then_tilde_expanded() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "[output]\nsvg_path = \"~/plots/hr.svg\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    let path = settings.output.svg_path.to_string_lossy().into_owned();
    assert!(!path.starts_with('~'), "unexpanded: {path}");
    assert!(path.ends_with("plots/hr.svg"));
}

#[test]
fn given_loaded_settings_when_shown_then_toml_contains_sections() {
    let toml = Settings::default().to_toml().unwrap();

    for section in ["[plot]", "[animation]", "[picker]", "[output]"] {
        assert!(toml.contains(section), "missing {section} in:\n{toml}");
    }
}
