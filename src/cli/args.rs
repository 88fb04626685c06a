//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::{SortKey, TableFilter, ViewFilter};

/// Hertzsprung-Russell diagram: star views, evolution animation, star table
#[derive(Parser, Debug)]
#[command(name = "hrd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (replaces ./.hrdiagram.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plot one view of the catalog
    View {
        /// main | giants | dwarfs | all
        view: ViewFilter,
    },

    /// Play the Sun's evolution animation
    Evolve {
        /// Delay between steps (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Show the star table
    Table {
        /// all | main | giant | supergiant | dwarf
        #[arg(short, long, default_value = "all")]
        filter: TableFilter,

        /// Column to sort by: name | temp | lum | type (repeat to toggle)
        #[arg(short, long)]
        sort: Vec<SortKey>,

        /// Finish with the last sorted column descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Select the star nearest to a plot position
    Pick {
        /// Plot x
        #[arg(required_unless_present = "keyboard", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Plot y
        #[arg(required_unless_present = "keyboard", allow_negative_numbers = true)]
        y: Option<f64>,

        /// View to pick from
        #[arg(long, default_value = "main")]
        view: ViewFilter,

        /// Keyboard activation: select the first visible star
        #[arg(short, long, conflicts_with_all = ["x", "y"])]
        keyboard: bool,
    },

    /// Activate a legend entry by its label
    Legend {
        /// e.g. "Main Sequence", "Giants", "White Dwarfs"
        label: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },
}
