//! Service container for dependency injection
//!
//! Wires the diagram controller to its collaborators.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{Collaborators, DiagramController, DiagramOptions};
use crate::config::{RendererKind, Settings};
use crate::infrastructure::console::ConsolePresenter;
use crate::infrastructure::svg::SvgRenderer;
use crate::infrastructure::terminal::TerminalRenderer;
use crate::infrastructure::traits::{
    ConsoleAnnouncer, Renderer, SleepScheduler, SystemClock,
};

/// Container holding settings and the collaborators services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Renderer, presenter, announcer, scheduler and clock
    pub io: Collaborators,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// The renderer is picked by `output.renderer`.
    pub fn new(settings: Settings) -> Self {
        let renderer: Arc<dyn Renderer> = match settings.output.renderer {
            RendererKind::Svg => Arc::new(SvgRenderer::new(
                settings.output.svg_path.clone(),
                settings.plot,
            )),
            RendererKind::Terminal => Arc::new(TerminalRenderer::new(settings.plot)),
        };
        debug!("renderer: {:?}", settings.output.renderer);

        let io = Collaborators {
            renderer,
            announcer: Arc::new(ConsoleAnnouncer),
            presenter: Arc::new(ConsolePresenter),
            scheduler: Arc::new(SleepScheduler),
            clock: Arc::new(SystemClock),
        };
        Self::with_deps(settings, io)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, io: Collaborators) -> Self {
        Self {
            settings: Arc::new(settings),
            io,
        }
    }

    /// A fresh controller configured from the settings.
    pub fn diagram(&self) -> DiagramController {
        DiagramController::new(DiagramOptions::from(self.settings.as_ref()), self.io.clone())
    }
}
