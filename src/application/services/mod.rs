//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (Renderer, Announcer, etc.)
//! but are themselves concrete structs, not traits.

mod diagram;

pub use diagram::{
    Collaborators, DiagramController, DiagramOptions, InputEvent, TickOutcome,
    EVOLUTION_COMPLETED_MESSAGE, EVOLUTION_STARTED_MESSAGE, EVOLUTION_STOPPED_MESSAGE,
    LOADED_MESSAGE,
};
