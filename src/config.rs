//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/hrdiagram/hrdiagram.toml`
//! 3. Local config: `<dir>/.hrdiagram.toml` (or an explicit `--config` file)
//! 4. Environment variables: `HRD_*` prefix, `__` between nesting levels
//!    (e.g. `HRD_PICKER__RADIUS=30`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{PlotGeometry, Pulse, DEFAULT_PICK_RADIUS};

/// Evolution animation timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between evolution steps
    pub step_interval_ms: u64,
    /// Pulsing of the current-position marker
    pub pulse: Pulse,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 2500,
            pulse: Pulse::default(),
        }
    }
}

impl AnimationConfig {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// Plot picking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    /// Maximum distance (plot units) between pointer and star
    pub radius: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PICK_RADIUS,
        }
    }
}

/// Which renderer draws frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    #[default]
    Svg,
    Terminal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub renderer: RendererKind,
    /// Target file for the SVG renderer (`~` and `$VAR` are expanded)
    pub svg_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            renderer: RendererKind::default(),
            svg_path: PathBuf::from("hr-diagram.svg"),
        }
    }
}

/// Unified configuration for hrdiagram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    /// Plot surface and axis ranges
    pub plot: PlotGeometry,
    pub animation: AnimationConfig,
    pub picker: PickerConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for hrdiagram.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hrdiagram").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("hrdiagram.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".hrdiagram.toml")
}

/// Expand shell variables and tilde in a path.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings: defaults, global file, `<local_dir>/.hrdiagram.toml`, env vars.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let local = local_dir
            .map(local_config_path)
            .filter(|p| p.exists());
        Self::load_layers(local.as_deref(), false)
    }

    /// Load settings with an explicit config file in place of the local one.
    ///
    /// Unlike the local file, this one must exist.
    pub fn load_from(file: &Path) -> Result<Self, ApplicationError> {
        Self::load_layers(Some(file), true)
    }

    fn load_layers(overlay: Option<&Path>, required: bool) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Settings::default()).map_err(config_err)?);

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(
                    File::from(global_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // 3. Local or explicit config
        if let Some(path) = overlay {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        // 4. Environment variables (explicit override)
        builder = builder.add_source(
            Environment::with_prefix("HRD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.output.svg_path = expand_path(&settings.output.svg_path);

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# hrdiagram configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/hrdiagram/hrdiagram.toml
#   Local:  ./.hrdiagram.toml  (or --config <file>)
#   Env:    HRD_* environment variables, e.g. HRD_PICKER__RADIUS=30

[plot]
# Surface size and plot-area edges
# width = 800
# height = 600
# left = 80
# right = 720
# top = 80
# bottom = 520
# Axis ranges (logarithmic)
# min_temperature = 3000
# max_temperature = 30000
# min_luminosity = 0.0001
# max_luminosity = 100000

[animation]
# Delay between evolution steps
# step_interval_ms = 2500

[animation.pulse]
# base_radius = 8
# amplitude = 2
# rate = 0.005

[picker]
# Maximum pointer distance for selecting a star
# radius = 20

[output]
# "svg" or "terminal"
# renderer = "svg"
# svg_path = "hr-diagram.svg"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
