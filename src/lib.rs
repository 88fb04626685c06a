//! hrdiagram: an interactive Hertzsprung-Russell diagram
//!
//! Stars are plotted on log-log axes (temperature falling to the right,
//! luminosity rising upward). Views filter the catalog by category, a table
//! sorts and filters it, and an animation walks the Sun's evolutionary track.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
