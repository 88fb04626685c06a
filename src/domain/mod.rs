//! Domain layer: the star catalog and the diagram's logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod animator;
pub mod directive;
pub mod entities;
pub mod error;
pub mod mapper;
pub mod picker;
pub mod table;
pub mod view;

pub use animator::{AnimationState, EvolutionAnimator, EvolutionFrame, Pulse, StartOutcome};
pub use directive::{Circle, DrawCommand, TextAnchor};
pub use entities::*;
pub use error::DomainError;
pub use mapper::{CoordinateMapper, PlotGeometry, Point};
pub use picker::{pick_nearest, DEFAULT_PICK_RADIUS};
pub use table::{SortDirection, SortKey, SortState, TableFilter, TableState};
pub use view::{filter_stars, visible_stars, ViewFilter, ViewSelection};
