//! SVG renderer: each frame replaces the contents of one SVG file.

use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::debug;

use crate::domain::{DrawCommand, PlotGeometry, TextAnchor};
use crate::infrastructure::traits::Renderer;

const BACKGROUND: &str = "#0b0d21";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn anchor(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Serialize a frame as a standalone SVG document.
///
/// Glow is drawn as a translucent halo, sized by the blur radius, under the circle.
/// Circles with zero opacity are skipped.
pub fn render_svg(commands: &[DrawCommand], geometry: &PlotGeometry) -> String {
    let (w, h) = (geometry.width, geometry.height);
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    out.push('\n');
    for command in commands {
        match command {
            DrawCommand::Clear => out.push_str(&format!(
                r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{BACKGROUND}"/>"#
            )),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => out.push_str(&format!(
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                from.x, from.y, to.x, to.y, color, width
            )),
            DrawCommand::Circle(c) if c.opacity <= 0.0 => continue,
            DrawCommand::Circle(c) => {
                if let Some(blur) = c.glow {
                    out.push_str(&format!(
                        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{:.3}"/>"#,
                        c.center.x,
                        c.center.y,
                        c.radius + blur / 2.0,
                        c.color,
                        c.opacity * 0.35
                    ));
                    out.push('\n');
                }
                out.push_str(&format!(
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{:.3}"/>"#,
                    c.center.x, c.center.y, c.radius, c.color, c.opacity
                ));
            }
            DrawCommand::Polyline {
                points,
                color,
                opacity,
                width,
                dash,
            } => {
                let points = points
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                    .join(" ");
                let dash = dash
                    .map(|[on, off]| format!(r#" stroke-dasharray="{} {}""#, on, off))
                    .unwrap_or_default();
                out.push_str(&format!(
                    r#"  <polyline points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"{}/>"#,
                    points, color, opacity, width, dash
                ));
            }
            DrawCommand::Text {
                position,
                text,
                color,
                anchor: a,
            } => out.push_str(&format!(
                r#"  <text x="{:.2}" y="{:.2}" fill="{}" font-family="Arial" font-size="12" text-anchor="{}">{}</text>"#,
                position.x,
                position.y,
                color,
                anchor(*a),
                escape(text)
            )),
        }
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

/// Writes every frame to `path`, overwriting the previous one.
#[derive(Debug)]
pub struct SvgRenderer {
    path: PathBuf,
    geometry: PlotGeometry,
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>, geometry: PlotGeometry) -> Self {
        Self {
            path: path.into(),
            geometry,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for SvgRenderer {
    fn draw(&self, commands: &[DrawCommand]) -> io::Result<()> {
        debug!(
            "draw: {} commands -> {}",
            commands.len(),
            self.path.display()
        );
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, render_svg(commands, &self.geometry))
    }
}
