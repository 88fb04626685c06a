//! Console presenter: info panel, view buttons, star table and detail panel on stdout.

use colored::Colorize;
use itertools::Itertools;

use crate::domain::{
    format_luminosity, format_thousands, SortKey, SortState, Star, ViewFilter, ViewSelection,
};
use crate::infrastructure::traits::Presenter;

const VIEW_BUTTONS: [ViewSelection; 5] = [
    ViewSelection::Filter(ViewFilter::MainSequence),
    ViewSelection::Filter(ViewFilter::Giants),
    ViewSelection::Filter(ViewFilter::WhiteDwarfs),
    ViewSelection::Filter(ViewFilter::All),
    ViewSelection::Evolution,
];

/// Render table rows as aligned text lines: one header line, one line per star.
///
/// The header marks the sorted column with `▲`/`▼`.
pub fn format_table(rows: &[&Star], sort: Option<SortState>) -> Vec<String> {
    let header = SortKey::ALL
        .iter()
        .map(|&key| {
            let marker = match sort.map(|s| s.aria_for(key)) {
                Some("ascending") => " ▲",
                Some("descending") => " ▼",
                _ => "",
            };
            format!("{}{}", key.header(), marker)
        })
        .chain(std::iter::once("Color".to_string()))
        .collect::<Vec<_>>();

    let body = rows.iter().map(|s| {
        vec![
            s.name.to_string(),
            format_thousands(s.temperature),
            format_luminosity(s.luminosity),
            s.category_label().to_string(),
            format!("■ {}", s.display_color),
        ]
    });

    let table: Vec<Vec<String>> = std::iter::once(header).chain(body).collect();
    let widths: Vec<usize> = (0..5)
        .map(|col| {
            table
                .iter()
                .map(|r| r[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    table
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Writes presentation state to stdout.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show_info(&self, title: &str, description: &str) {
        println!("{}", title.cyan().bold());
        println!("  {}", description);
    }

    fn show_active_view(&self, view: ViewSelection) {
        let buttons = VIEW_BUTTONS
            .iter()
            .map(|&b| {
                if b == view {
                    format!("[{}]", b.key()).green().bold().to_string()
                } else {
                    format!(" {} ", b.key())
                }
            })
            .join(" ");
        println!("{}", buttons);
    }

    fn show_table(&self, rows: &[&Star], sort: Option<SortState>) {
        let mut lines = format_table(rows, sort).into_iter();
        if let Some(header) = lines.next() {
            println!("{}", header.bold());
        }
        for line in lines {
            println!("{}", line);
        }
        if rows.is_empty() {
            println!("  {}", "(no stars)".dimmed());
        }
    }

    fn show_star_details(&self, star: &Star) {
        println!("{}", star.name.yellow().bold());
        println!("  {}", star.details());
    }
}
