//! Command dispatch: one handler per subcommand

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::application::services::DiagramController;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_dir, global_config_path, local_config_path, Settings};
use crate::domain::{Point, SortDirection, SortKey, TableFilter, ViewFilter};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::View { view }) => _view(load_settings(cli)?, *view),
        Some(Commands::Evolve { interval_ms }) => _evolve(load_settings(cli)?, *interval_ms),
        Some(Commands::Table { filter, sort, desc }) => {
            _table(load_settings(cli)?, *filter, sort, *desc)
        }
        Some(Commands::Pick {
            x,
            y,
            view,
            keyboard,
        }) => _pick(load_settings(cli)?, *view, x.zip(*y), *keyboard),
        Some(Commands::Legend { label }) => _legend(load_settings(cli)?, label),
        Some(Commands::Config { command }) => _config(cli, command),
        // handled in main
        Some(Commands::Completion { .. }) => Ok(()),
        None => _init(load_settings(cli)?),
    }
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|e| InfraError::io("read current directory", e).into())
}

/// `--config` replaces the local `.hrdiagram.toml` layer.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = match &cli.config {
        Some(file) => Settings::load_from(file)?,
        None => Settings::load(Some(&current_dir()?))?,
    };
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn controller(settings: Settings) -> DiagramController {
    ServiceContainer::new(settings).diagram()
}

fn report_output(settings: &Settings) {
    if settings.output.renderer == crate::config::RendererKind::Svg {
        output::action("Plot", &settings.output.svg_path.display());
    }
}

#[instrument(skip(settings))]
fn _init(settings: Settings) -> CliResult<()> {
    let mut diagram = controller(settings.clone());
    diagram.init()?;
    report_output(&settings);
    Ok(())
}

#[instrument(skip(settings))]
fn _view(settings: Settings, view: ViewFilter) -> CliResult<()> {
    let mut diagram = controller(settings.clone());
    diagram.show_view(view)?;
    report_output(&settings);
    Ok(())
}

#[instrument(skip(settings))]
fn _evolve(mut settings: Settings, interval_ms: Option<u64>) -> CliResult<()> {
    if let Some(ms) = interval_ms {
        settings.animation.step_interval_ms = ms;
    }
    let mut diagram = controller(settings.clone());
    diagram.run_evolution()?;
    report_output(&settings);
    Ok(())
}

/// Replays the filter and sort requests as table events, in order.
#[instrument(skip(settings))]
fn _table(settings: Settings, filter: TableFilter, sort: &[SortKey], desc: bool) -> CliResult<()> {
    let mut diagram = controller(settings);
    if filter == TableFilter::All && !sort.is_empty() {
        debug!("unfiltered table, skipping filter event");
    } else {
        diagram.set_table_filter(filter);
    }
    for key in sort {
        diagram.request_sort(*key);
    }
    if let Some(state) = diagram.table().sort() {
        if desc && state.direction == SortDirection::Ascending {
            diagram.request_sort(state.key);
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _pick(
    settings: Settings,
    view: ViewFilter,
    at: Option<(f64, f64)>,
    keyboard: bool,
) -> CliResult<()> {
    let mut diagram = controller(settings);
    diagram.show_view(view)?;
    let picked = if keyboard {
        diagram.select_first_visible()
    } else {
        let (x, y) = at.ok_or_else(|| CliError::InvalidArgs("need <x> <y> or --keyboard".into()))?;
        diagram.select_at(Point::new(x, y))
    };
    if picked.is_none() {
        output::warning("no star at that position");
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _legend(settings: Settings, label: &str) -> CliResult<()> {
    let mut diagram = controller(settings.clone());
    match diagram.activate_legend(label)? {
        Some(_) => report_output(&settings),
        None => output::warning(&format!("unknown legend entry: {label}")),
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("Global", &path.display()),
                None => output::failure("no global config directory"),
            }
            let local = match &cli.config {
                Some(file) => file.clone(),
                None => local_config_path(&current_dir()?),
            };
            output::action("Local", &local.display());
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                let dir = global_config_dir()
                    .ok_or_else(|| CliError::Usage("no global config directory".into()))?;
                std::fs::create_dir_all(&dir)
                    .map_err(|e| InfraError::io(format!("create {}", dir.display()), e))?;
                dir.join("hrdiagram.toml")
            } else {
                local_config_path(&current_dir()?)
            };
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
            Ok(())
        }
    }
}
