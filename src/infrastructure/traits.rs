//! Collaborator traits for testability
//!
//! The diagram core never draws, prints or sleeps itself. These traits are the
//! boundary; services are tested with recording mock implementations.

use std::io;
use std::time::Duration;

use colored::Colorize;
use tracing::info;

use crate::domain::{DrawCommand, SortState, Star, ViewSelection};

/// Performs the pixel output for a frame of draw commands.
pub trait Renderer: Send + Sync {
    /// Draw one complete frame. Frames start with `DrawCommand::Clear`.
    fn draw(&self, commands: &[DrawCommand]) -> io::Result<()>;
}

/// Exposes status sentences to assistive technology.
///
/// Clearing stale text (so repeats are perceivable) is the implementation's job.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}

/// Presents info panel, button state, table rows and star details.
pub trait Presenter: Send + Sync {
    /// Info panel beside the plot.
    fn show_info(&self, title: &str, description: &str);

    /// Pressed state of the view buttons.
    fn show_active_view(&self, view: ViewSelection);

    /// Table rows in display order, plus the active sort for `aria-sort`.
    fn show_table(&self, rows: &[&Star], sort: Option<SortState>);

    /// Detail panel for a selected star.
    fn show_star_details(&self, star: &Star);
}

/// Deferred execution for the animation loop.
pub trait Scheduler: Send + Sync {
    /// Block until `delay` has elapsed.
    fn wait(&self, delay: Duration);
}

/// Wall-clock source for time-varying effects.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Sleeps the current thread.
#[derive(Debug, Default)]
pub struct SleepScheduler;

impl Scheduler for SleepScheduler {
    fn wait(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// System time via chrono.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Prints announcements to stdout, one per line, and logs them.
#[derive(Debug, Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, message: &str) {
        info!(announcement = message, "announce");
        if !message.is_empty() {
            println!("{} {}", "»".cyan(), message.cyan());
        }
    }
}
