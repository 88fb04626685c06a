//! Diagram controller
//!
//! Owns the view, table and animation state and turns input events into draw
//! frames, presenter updates and announcements.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::application::error_ext::RenderResultExt;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::view::view_frame;
use crate::domain::{
    catalog, pick_nearest, visible_stars, AnimationState, CoordinateMapper, DrawCommand,
    EvolutionAnimator, PlotGeometry, Point, Pulse, SortKey, Star, StartOutcome, TableFilter,
    TableState, ViewFilter, ViewSelection, DEFAULT_PICK_RADIUS,
};
use crate::infrastructure::traits::{Announcer, Clock, Presenter, Renderer, Scheduler};

pub const LOADED_MESSAGE: &str = "Application loaded. Main sequence stars are now displayed.";
pub const EVOLUTION_STARTED_MESSAGE: &str =
    "Starting star evolution animation - showing the life cycle of a Sun-like star";
pub const EVOLUTION_STOPPED_MESSAGE: &str = "Star evolution animation stopped";
pub const EVOLUTION_COMPLETED_MESSAGE: &str = "Star evolution animation completed";

/// Discrete user actions, however they were captured.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ViewSelected(ViewSelection),
    LegendActivated(String),
    SortRequested(SortKey),
    TableFilterChanged(TableFilter),
    /// Click (or equivalent) at a plot-surface position
    PlotActivated(Point),
    /// Enter/Space on the focused plot
    PlotKeyActivated,
}

/// What the caller should do after an animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick again after the delay.
    Continue(Duration),
    /// The final step was drawn; completion follows after the delay.
    Finished(Duration),
    /// Nothing was running; nothing was drawn.
    Idle,
}

/// Tunables for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramOptions {
    pub geometry: PlotGeometry,
    pub pulse: Pulse,
    pub pick_radius: f64,
    pub step_interval: Duration,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            geometry: PlotGeometry::default(),
            pulse: Pulse::default(),
            pick_radius: DEFAULT_PICK_RADIUS,
            step_interval: Duration::from_millis(2500),
        }
    }
}

impl From<&Settings> for DiagramOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            geometry: settings.plot,
            pulse: settings.animation.pulse,
            pick_radius: settings.picker.radius,
            step_interval: settings.animation.step_interval(),
        }
    }
}

/// The boundary objects the controller talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub renderer: Arc<dyn Renderer>,
    pub announcer: Arc<dyn Announcer>,
    pub presenter: Arc<dyn Presenter>,
    pub scheduler: Arc<dyn Scheduler>,
    pub clock: Arc<dyn Clock>,
}

/// Single owner of all mutable diagram state.
pub struct DiagramController {
    stars: &'static [Star],
    mapper: CoordinateMapper,
    animator: EvolutionAnimator,
    table: TableState,
    current_view: ViewSelection,
    pick_radius: f64,
    step_interval: Duration,
    io: Collaborators,
}

impl DiagramController {
    pub fn new(options: DiagramOptions, io: Collaborators) -> Self {
        Self::with_stars(options, io, catalog())
    }

    /// Controller over a custom star set instead of the built-in catalog.
    pub fn with_stars(
        options: DiagramOptions,
        io: Collaborators,
        stars: &'static [Star],
    ) -> Self {
        let mapper = CoordinateMapper::new(options.geometry);
        Self {
            stars,
            mapper,
            animator: EvolutionAnimator::solar(mapper, options.pulse),
            table: TableState::new(),
            current_view: ViewSelection::Filter(ViewFilter::MainSequence),
            pick_radius: options.pick_radius,
            step_interval: options.step_interval,
            io,
        }
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn current_view(&self) -> ViewSelection {
        self.current_view
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Initial screen: full table, main-sequence plot, loaded announcement.
    #[instrument(skip(self))]
    pub fn init(&mut self) -> ApplicationResult<()> {
        self.show_table();
        self.show_view(ViewFilter::MainSequence)?;
        self.io.announcer.announce(LOADED_MESSAGE);
        Ok(())
    }

    /// Dispatch one input event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> ApplicationResult<()> {
        match event {
            InputEvent::ViewSelected(ViewSelection::Filter(view)) => {
                self.show_view(view)?;
            }
            InputEvent::ViewSelected(ViewSelection::Evolution) => {
                self.start_evolution();
            }
            InputEvent::LegendActivated(label) => {
                self.activate_legend(&label)?;
            }
            InputEvent::SortRequested(key) => {
                self.request_sort(key);
            }
            InputEvent::TableFilterChanged(filter) => {
                self.set_table_filter(filter);
            }
            InputEvent::PlotActivated(at) => {
                self.select_at(at);
            }
            InputEvent::PlotKeyActivated => {
                self.select_first_visible();
            }
        }
        Ok(())
    }

    /// Stars on the plot for the current view; the evolution view counts as "all".
    pub fn visible_stars(&self) -> Vec<&'static Star> {
        let filter = match self.current_view {
            ViewSelection::Filter(f) => f,
            ViewSelection::Evolution => ViewFilter::All,
        };
        visible_stars(self.stars, filter)
    }

    /// Draw a filtered view. A running animation is stopped first.
    /// Returns the number of stars shown.
    #[instrument(skip(self))]
    pub fn show_view(&mut self, view: ViewFilter) -> ApplicationResult<usize> {
        if self.animator.cancel() {
            debug!("show_view: cancelled running animation");
        }
        self.current_view = ViewSelection::Filter(view);
        let stars = self.visible_stars();
        let frame = view_frame(&self.mapper, &stars, view);
        self.draw(&frame, view.key())?;

        self.io.presenter.show_active_view(self.current_view);
        self.io.presenter.show_info(view.title(), view.description());
        self.io.announcer.announce(&view.announcement(stars.len()));
        Ok(stars.len())
    }

    /// Legend entries route to their view; unrecognized labels do nothing.
    pub fn activate_legend(&mut self, label: &str) -> ApplicationResult<Option<ViewFilter>> {
        match ViewFilter::from_legend_label(label) {
            Some(view) => {
                self.show_view(view)?;
                Ok(Some(view))
            }
            None => {
                debug!("activate_legend: ignoring label {:?}", label);
                Ok(None)
            }
        }
    }

    /// Start the evolution animation, or stop it if it is running.
    #[instrument(skip(self))]
    pub fn start_evolution(&mut self) -> StartOutcome {
        let outcome = self.animator.start();
        match outcome {
            StartOutcome::Started => {
                self.current_view = ViewSelection::Evolution;
                self.io.announcer.announce(EVOLUTION_STARTED_MESSAGE);
            }
            StartOutcome::Cancelled => {
                self.io.announcer.announce(EVOLUTION_STOPPED_MESSAGE);
            }
        }
        self.io.presenter.show_active_view(self.current_view);
        debug!("start_evolution: {:?}", outcome);
        outcome
    }

    /// Draw the next evolution step, if the animation is still running.
    pub fn tick_evolution(&mut self) -> ApplicationResult<TickOutcome> {
        let now = self.io.clock.now_millis();
        let Some(frame) = self.animator.tick(now) else {
            return Ok(TickOutcome::Idle);
        };
        debug!("tick_evolution: step {}", frame.index);

        // a frame that never reached the surface ends the run
        if let Err(e) = self.draw(&frame.commands(&self.mapper), "evolution step") {
            self.animator.cancel();
            return Err(e);
        }
        self.io
            .presenter
            .show_info(&frame.title(), &frame.description());
        self.io.announcer.announce(&frame.announcement());

        Ok(if frame.is_last {
            TickOutcome::Finished(self.step_interval)
        } else {
            TickOutcome::Continue(self.step_interval)
        })
    }

    /// Announce completion. Does nothing unless the animation has completed.
    pub fn complete_evolution(&mut self) -> bool {
        let completed = self.animator.state() == AnimationState::Completed;
        if completed {
            self.io.announcer.announce(EVOLUTION_COMPLETED_MESSAGE);
        }
        completed
    }

    /// Play the animation to the end, waiting on the scheduler between steps.
    ///
    /// If an animation was already running, this call stops it instead.
    #[instrument(skip(self))]
    pub fn run_evolution(&mut self) -> ApplicationResult<StartOutcome> {
        let outcome = self.start_evolution();
        if outcome == StartOutcome::Cancelled {
            return Ok(outcome);
        }
        loop {
            match self.tick_evolution()? {
                TickOutcome::Continue(delay) => self.io.scheduler.wait(delay),
                TickOutcome::Finished(delay) => {
                    self.io.scheduler.wait(delay);
                    self.complete_evolution();
                    break;
                }
                TickOutcome::Idle => break,
            }
        }
        Ok(outcome)
    }

    /// Current table rows: filter, then sort, from the catalog.
    pub fn table_rows(&self) -> Vec<&'static Star> {
        self.table.rows(self.stars)
    }

    /// Change the table filter. Returns the number of rows shown.
    #[instrument(skip(self))]
    pub fn set_table_filter(&mut self, filter: TableFilter) -> usize {
        self.table.set_filter(filter);
        let count = self.show_table();
        self.io
            .announcer
            .announce(&format!("Table filtered to show {} stars", count));
        count
    }

    /// Sort by `key`; repeating the active column flips direction.
    #[instrument(skip(self))]
    pub fn request_sort(&mut self, key: SortKey) {
        let state = self.table.request_sort(key);
        self.show_table();
        self.io.announcer.announce(&format!(
            "Table sorted by {} in {} order",
            state.key,
            state.direction.aria()
        ));
    }

    /// Select the visible star nearest to `at`, if one is within the pick radius.
    #[instrument(skip(self))]
    pub fn select_at(&mut self, at: Point) -> Option<&'static Star> {
        let visible = self.visible_stars();
        let picked = pick_nearest(&self.mapper, &visible, at, self.pick_radius);
        match picked {
            Some(star) => self.present_star(star),
            None => debug!("select_at: no star within {}", self.pick_radius),
        }
        picked
    }

    /// Keyboard activation selects the first visible star.
    pub fn select_first_visible(&mut self) -> Option<&'static Star> {
        let first = self.visible_stars().first().copied();
        if let Some(star) = first {
            self.present_star(star);
        }
        first
    }

    fn present_star(&self, star: &Star) {
        self.io.presenter.show_star_details(star);
        self.io
            .announcer
            .announce(&format!("Selected star: {}. {}", star.name, star.details()));
    }

    /// Hand the current rows to the presenter. Returns the row count.
    pub fn show_table(&self) -> usize {
        let rows = self.table_rows();
        self.io.presenter.show_table(&rows, self.table.sort());
        rows.len()
    }

    fn draw(&self, commands: &[DrawCommand], what: &str) -> ApplicationResult<()> {
        self.io
            .renderer
            .draw(commands)
            .with_render_context(&format!("draw {}", what))
    }
}
