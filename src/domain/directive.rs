//! Render directives: what to draw, independent of any drawing surface.

use crate::domain::mapper::{Axis, CoordinateMapper, Point};

pub const AXIS_COLOR: &str = "#ffffff";
pub const TEMPERATURE_LABEL_COLOR: &str = "#4ecdc4";
pub const LUMINOSITY_LABEL_COLOR: &str = "#ff6b6b";

/// Horizontal alignment of a text label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A filled circle. `glow` is the blur radius of a halo in the circle's color.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub glow: Option<f64>,
}

/// A single drawing instruction for a `Renderer`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the surface.
    Clear,
    Line {
        from: Point,
        to: Point,
        color: &'static str,
        width: f64,
    },
    Circle(Circle),
    /// Open polyline; `dash` is `[on, off]` lengths, `None` for solid.
    Polyline {
        points: Vec<Point>,
        color: &'static str,
        opacity: f64,
        width: f64,
        dash: Option<[f64; 2]>,
    },
    Text {
        position: Point,
        text: String,
        color: &'static str,
        anchor: TextAnchor,
    },
}

impl DrawCommand {
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle(_))
    }
}

/// Axis lines along the bottom and left edges of the plot area, plus tick labels.
pub fn axes(mapper: &CoordinateMapper) -> Vec<DrawCommand> {
    let g = mapper.geometry();
    let origin = Point::new(g.left, g.bottom);
    let mut commands = vec![
        DrawCommand::Line {
            from: origin,
            to: Point::new(g.right, g.bottom),
            color: AXIS_COLOR,
            width: 2.0,
        },
        DrawCommand::Line {
            from: origin,
            to: Point::new(g.left, g.top),
            color: AXIS_COLOR,
            width: 2.0,
        },
    ];
    for tick in mapper.ticks() {
        let command = match tick.axis {
            Axis::Temperature => DrawCommand::Text {
                position: Point::new(tick.position.x, tick.position.y + 20.0),
                text: tick.label,
                color: TEMPERATURE_LABEL_COLOR,
                anchor: TextAnchor::Middle,
            },
            Axis::Luminosity => DrawCommand::Text {
                position: Point::new(tick.position.x - 5.0, tick.position.y + 4.0),
                text: tick.label,
                color: LUMINOSITY_LABEL_COLOR,
                anchor: TextAnchor::End,
            },
        };
        commands.push(command);
    }
    commands
}

/// A plotted star: a disc plus a smaller glowing core.
pub fn star_marker(center: Point, color: &'static str, size: f64, opacity: f64) -> [DrawCommand; 2] {
    [
        DrawCommand::Circle(Circle {
            center,
            radius: size,
            color,
            opacity,
            glow: None,
        }),
        DrawCommand::Circle(Circle {
            center,
            radius: size * 0.7,
            color,
            opacity,
            glow: Some(10.0),
        }),
    ]
}
