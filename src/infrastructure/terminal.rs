//! Terminal renderer: a coarse character-cell plot on stdout.

use std::io::{self, Write};

use colored::Colorize;

use crate::domain::{DrawCommand, PlotGeometry, Point, TextAnchor};
use crate::infrastructure::traits::Renderer;

pub const DEFAULT_COLUMNS: usize = 80;
pub const DEFAULT_ROWS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Option<&'static str>,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    color: None,
};

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn circle_glyph(radius: f64, opacity: f64) -> char {
    if opacity < 0.5 {
        '·'
    } else if radius >= 10.0 {
        '@'
    } else if radius >= 7.0 {
        'O'
    } else {
        'o'
    }
}

struct Canvas {
    cells: Vec<Vec<Cell>>,
    sx: f64,
    sy: f64,
}

impl Canvas {
    fn new(geometry: &PlotGeometry, columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![BLANK; columns]; rows],
            sx: columns as f64 / geometry.width,
            sy: rows as f64 / geometry.height,
        }
    }

    fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        let (col, row) = ((p.x * self.sx).floor(), (p.y * self.sy).floor());
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (row < self.cells.len() && col < self.cells[0].len()).then_some((col, row))
    }

    fn put(&mut self, p: Point, cell: Cell) {
        if let Some((col, row)) = self.cell_of(p) {
            self.cells[row][col] = cell;
        }
    }

    fn segment(&mut self, from: Point, to: Point, glyph: char, color: &'static str, skip: bool) {
        let steps = ((to.x - from.x).abs() * self.sx)
            .max((to.y - from.y).abs() * self.sy)
            .ceil()
            .max(1.0) as usize;
        for i in 0..=steps {
            if skip && i % 2 == 1 {
                continue;
            }
            let t = i as f64 / steps as f64;
            let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.put(
                p,
                Cell {
                    glyph,
                    color: Some(color),
                },
            );
        }
    }

    fn text(&mut self, p: Point, text: &str, anchor: TextAnchor, color: &'static str) {
        let Some((col, row)) = self.cell_of(p) else {
            return;
        };
        let len = text.chars().count();
        let start = match anchor {
            TextAnchor::Start => col,
            TextAnchor::Middle => col.saturating_sub(len / 2),
            TextAnchor::End => col.saturating_sub(len),
        };
        let width = self.cells[row].len();
        for (i, ch) in text.chars().enumerate() {
            if start + i < width {
                self.cells[row][start + i] = Cell {
                    glyph: ch,
                    color: Some(color),
                };
            }
        }
    }
}

/// Rasterize a frame into `rows` lines of `columns` characters.
///
/// With `color` set, glyphs carry their command's truecolor; otherwise output is plain text.
pub fn render_ascii(
    commands: &[DrawCommand],
    geometry: &PlotGeometry,
    columns: usize,
    rows: usize,
    color: bool,
) -> String {
    let mut canvas = Canvas::new(geometry, columns, rows);
    for command in commands {
        match command {
            DrawCommand::Clear => canvas.cells = vec![vec![BLANK; columns]; rows],
            DrawCommand::Line { from, to, color, .. } => {
                let glyph = if (from.y - to.y).abs() < f64::EPSILON {
                    '─'
                } else {
                    '│'
                };
                canvas.segment(*from, *to, glyph, *color, false);
            }
            DrawCommand::Circle(c) if c.opacity <= 0.0 => {}
            DrawCommand::Circle(c) => canvas.put(
                c.center,
                Cell {
                    glyph: circle_glyph(c.radius, c.opacity),
                    color: Some(c.color),
                },
            ),
            DrawCommand::Polyline {
                points,
                color,
                dash,
                ..
            } => {
                for (a, b) in points.iter().zip(points.iter().skip(1)) {
                    canvas.segment(*a, *b, '∙', *color, dash.is_some());
                }
            }
            DrawCommand::Text {
                position,
                text,
                color,
                anchor,
            } => canvas.text(*position, text, *anchor, *color),
        }
    }

    canvas
        .cells
        .iter()
        .map(|row| {
            let line: String = row
                .iter()
                .map(|cell| match (color, cell.color.and_then(parse_hex)) {
                    (true, Some((r, g, b))) => cell.glyph.to_string().truecolor(r, g, b).to_string(),
                    _ => cell.glyph.to_string(),
                })
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints each frame to stdout.
#[derive(Debug)]
pub struct TerminalRenderer {
    geometry: PlotGeometry,
    columns: usize,
    rows: usize,
}

impl TerminalRenderer {
    pub fn new(geometry: PlotGeometry) -> Self {
        Self {
            geometry,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&self, commands: &[DrawCommand]) -> io::Result<()> {
        let frame = render_ascii(commands, &self.geometry, self.columns, self.rows, true);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", frame)?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{directive, Circle, CoordinateMapper};

    #[test]
    fn given_hex_colors_then_parses_channels() {
        assert_eq!(parse_hex("#ff8844"), Some((0xff, 0x88, 0x44)));
        assert_eq!(parse_hex("ff8844"), None);
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn given_axes_when_rasterizing_then_labels_appear_in_plain_text() {
        let commands = directive::axes(&CoordinateMapper::default());
        let out = render_ascii(&commands, &PlotGeometry::default(), 80, 30, false);
        assert_eq!(out.split('\n').count(), 30);
        assert!(out.contains("30,000K"));
        assert!(out.contains("0.0001"));
        assert!(out.contains('─'));
    }

    #[test]
    fn given_large_circle_when_rasterizing_then_marks_its_cell() {
        let commands = vec![DrawCommand::Circle(Circle {
            center: Point::new(400.0, 300.0),
            radius: 12.0,
            color: "#ffffff",
            opacity: 1.0,
            glow: None,
        })];
        let out = render_ascii(&commands, &PlotGeometry::default(), 80, 30, false);
        let row = out.lines().nth(15).unwrap();
        assert_eq!(row.chars().nth(40), Some('@'));
    }
}
