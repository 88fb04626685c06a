//! Evolution animator: steps a star along its evolutionary path, one frame per tick.
//!
//! ```text
//! Idle ──start──▶ Running(0) ──tick──▶ Running(1) … ──tick (last step)──▶ Completed
//!   ▲                 │                                                    │
//!   └────start────────┘ (toggle: cancels)            start (restarts) ─────┘
//! ```
//!
//! The animator never schedules anything itself; whoever owns it calls [`EvolutionAnimator::tick`]
//! once per timer interval. A tick that finds the animation no longer running produces nothing.

use serde::{Deserialize, Serialize};

use crate::domain::directive::{self, Circle, DrawCommand};
use crate::domain::entities::{format_luminosity, format_thousands, EvolutionStep, EVOLUTION_PATH};
use crate::domain::mapper::{CoordinateMapper, Point};

pub const TRAIL_COLOR: &str = "#ffff44";
const TRAIL_RADIUS: f64 = 4.0;
const MARKER_RADIUS: f64 = 10.0;
const MARKER_GLOW: f64 = 15.0;
const PATH_OPACITY: f64 = 0.6;
const PATH_DASH: [f64; 2] = [5.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running {
        step: usize,
    },
    Completed,
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationState::Running { .. })
    }
}

/// Result of calling [`EvolutionAnimator::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    Cancelled,
}

/// Oscillation of the current-position marker: `base + amplitude * sin(t_ms * rate)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pulse {
    pub base_radius: f64,
    pub amplitude: f64,
    /// Radians per millisecond.
    pub rate: f64,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            base_radius: 8.0,
            amplitude: 2.0,
            rate: 0.005,
        }
    }
}

impl Pulse {
    pub fn radius_at(&self, now_ms: i64) -> f64 {
        self.base_radius + (now_ms as f64 * self.rate).sin() * self.amplitude
    }
}

/// Opacity of a trail point `distance` steps behind the current one, never below zero.
pub fn fade_weight(distance: usize) -> f64 {
    (0.3 - 0.05 * distance as f64).max(0.0)
}

/// A past position on the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub index: usize,
    pub position: Point,
    pub weight: f64,
}

/// Everything needed to draw and describe one animation step.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionFrame {
    pub index: usize,
    pub step: EvolutionStep,
    pub position: Point,
    pub trail: Vec<TrailPoint>,
    /// Points from the first step through the current one; absent on the first step.
    pub path: Option<Vec<Point>>,
    pub pulse_radius: f64,
    pub is_last: bool,
}

impl EvolutionFrame {
    pub fn commands(&self, mapper: &CoordinateMapper) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Clear];
        commands.extend(directive::axes(mapper));
        commands.extend(self.trail.iter().map(|p| {
            DrawCommand::Circle(Circle {
                center: p.position,
                radius: TRAIL_RADIUS,
                color: TRAIL_COLOR,
                opacity: p.weight,
                glow: None,
            })
        }));
        if let Some(points) = &self.path {
            commands.push(DrawCommand::Polyline {
                points: points.clone(),
                color: TRAIL_COLOR,
                opacity: PATH_OPACITY,
                width: 2.0,
                dash: Some(PATH_DASH),
            });
        }
        commands.push(DrawCommand::Circle(Circle {
            center: self.position,
            radius: MARKER_RADIUS,
            color: TRAIL_COLOR,
            opacity: 1.0,
            glow: Some(MARKER_GLOW),
        }));
        commands.push(DrawCommand::Circle(Circle {
            center: self.position,
            radius: self.pulse_radius,
            color: TRAIL_COLOR,
            opacity: 0.7,
            glow: None,
        }));
        commands
    }

    pub fn title(&self) -> String {
        format!("Stellar Evolution: {}", self.step.phase)
    }

    pub fn description(&self) -> String {
        format!(
            "Age: {}. Temperature: {}K, Luminosity: {} solar units. This animation shows how our \
             Sun will evolve over billions of years, moving through different regions of the H-R \
             diagram.",
            self.step.age,
            format_thousands(self.step.temperature),
            format_luminosity(self.step.luminosity)
        )
    }

    pub fn announcement(&self) -> String {
        format!(
            "Evolution step {}: {} at {}",
            self.index + 1,
            self.step.phase,
            self.step.age
        )
    }
}

/// Sequential state machine over a fixed list of evolution steps.
#[derive(Debug, Clone)]
pub struct EvolutionAnimator {
    mapper: CoordinateMapper,
    steps: Vec<EvolutionStep>,
    pulse: Pulse,
    state: AnimationState,
}

impl EvolutionAnimator {
    pub fn new(mapper: CoordinateMapper, steps: Vec<EvolutionStep>, pulse: Pulse) -> Self {
        Self {
            mapper,
            steps,
            pulse,
            state: AnimationState::Idle,
        }
    }

    /// Animator over the Sun's evolutionary path.
    pub fn solar(mapper: CoordinateMapper, pulse: Pulse) -> Self {
        Self::new(mapper, EVOLUTION_PATH.to_vec(), pulse)
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn steps(&self) -> &[EvolutionStep] {
        &self.steps
    }

    /// Start playback, or stop it if it is already running.
    pub fn start(&mut self) -> StartOutcome {
        if self.state.is_running() {
            self.state = AnimationState::Idle;
            StartOutcome::Cancelled
        } else {
            self.state = AnimationState::Running { step: 0 };
            StartOutcome::Started
        }
    }

    /// Stop playback without restarting. Returns whether anything was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.state.is_running();
        if was_running {
            self.state = AnimationState::Idle;
        }
        was_running
    }

    /// Produce the frame for the current step and advance.
    ///
    /// Returns `None` unless running. The tick that renders the final step moves
    /// the animator to `Completed`.
    pub fn tick(&mut self, now_ms: i64) -> Option<EvolutionFrame> {
        let AnimationState::Running { step } = self.state else {
            return None;
        };
        let Some(current) = self.steps.get(step).copied() else {
            self.state = AnimationState::Completed;
            return None;
        };

        let trail = self.steps[..step]
            .iter()
            .enumerate()
            .map(|(i, s)| TrailPoint {
                index: i,
                position: self.mapper.step_position(s),
                weight: fade_weight(step - i),
            })
            .collect();
        let path = (step > 0).then(|| {
            self.steps[..=step]
                .iter()
                .map(|s| self.mapper.step_position(s))
                .collect()
        });

        let next = step + 1;
        let is_last = next == self.steps.len();
        self.state = if is_last {
            AnimationState::Completed
        } else {
            AnimationState::Running { step: next }
        };

        Some(EvolutionFrame {
            index: step,
            step: current,
            position: self.mapper.step_position(&current),
            trail,
            path,
            pulse_radius: self.pulse.radius_at(now_ms),
            is_last,
        })
    }
}
