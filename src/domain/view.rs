//! Filtered views of the catalog and the static frame drawn for each.

use std::fmt;
use std::str::FromStr;

use crate::domain::directive::{self, DrawCommand};
use crate::domain::entities::{Star, StarCategory};
use crate::domain::error::DomainError;
use crate::domain::mapper::CoordinateMapper;

/// The category predicate behind a plot view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewFilter {
    #[default]
    MainSequence,
    Giants,
    WhiteDwarfs,
    All,
}

impl ViewFilter {
    pub fn key(self) -> &'static str {
        match self {
            ViewFilter::MainSequence => "main",
            ViewFilter::Giants => "giants",
            ViewFilter::WhiteDwarfs => "dwarfs",
            ViewFilter::All => "all",
        }
    }

    pub fn matches(self, category: StarCategory) -> bool {
        match self {
            ViewFilter::MainSequence => category == StarCategory::MainSequence,
            ViewFilter::Giants => {
                matches!(category, StarCategory::Giant | StarCategory::Supergiant)
            }
            ViewFilter::WhiteDwarfs => category == StarCategory::WhiteDwarf,
            ViewFilter::All => true,
        }
    }

    /// Marker radius for a star of `category` in this view.
    pub fn marker_size(self, category: StarCategory) -> f64 {
        match self {
            ViewFilter::MainSequence => 8.0,
            ViewFilter::Giants => 12.0,
            ViewFilter::WhiteDwarfs => 6.0,
            ViewFilter::All => match category {
                StarCategory::Giant | StarCategory::Supergiant => 10.0,
                StarCategory::MainSequence => 8.0,
                StarCategory::WhiteDwarf => 6.0,
            },
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewFilter::MainSequence => "Main Sequence Stars",
            ViewFilter::Giants => "Giant and Supergiant Stars",
            ViewFilter::WhiteDwarfs => "White Dwarf Stars",
            ViewFilter::All => "All Star Types",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ViewFilter::MainSequence => {
                "These stars are in the stable phase of their lives, fusing hydrogen into helium \
                 in their cores. They form a diagonal band from hot, bright blue stars to cool, \
                 dim red stars. Our Sun is a main sequence star."
            }
            ViewFilter::Giants => {
                "These are evolved stars that have exhausted hydrogen in their cores and expanded \
                 dramatically. Red giants and supergiants are much larger and brighter than main \
                 sequence stars of the same temperature."
            }
            ViewFilter::WhiteDwarfs => {
                "These are the remnants of low to medium mass stars. They are very hot but small \
                 and dim. White dwarfs slowly cool over billions of years, eventually becoming \
                 cold black dwarfs."
            }
            ViewFilter::All => {
                "The complete Hertzsprung-Russell diagram showing all star types: main sequence, \
                 giants, supergiants, and white dwarfs. Notice how different types occupy \
                 different regions of the diagram."
            }
        }
    }

    /// Status sentence for a view showing `count` stars.
    pub fn announcement(self, count: usize) -> String {
        match self {
            ViewFilter::MainSequence => format!("Showing {} main sequence stars", count),
            ViewFilter::Giants => format!("Showing {} giant and supergiant stars", count),
            ViewFilter::WhiteDwarfs => format!("Showing {} white dwarf stars", count),
            ViewFilter::All => format!("Showing all {} stars", count),
        }
    }

    /// Route a legend entry to its view by keyword, case-insensitively.
    pub fn from_legend_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if label.contains("main") {
            Some(ViewFilter::MainSequence)
        } else if label.contains("giant") {
            Some(ViewFilter::Giants)
        } else if label.contains("dwarf") {
            Some(ViewFilter::WhiteDwarfs)
        } else {
            None
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ViewFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(ViewFilter::MainSequence),
            "giants" => Ok(ViewFilter::Giants),
            "dwarfs" => Ok(ViewFilter::WhiteDwarfs),
            "all" => Ok(ViewFilter::All),
            _ => Err(DomainError::UnknownView(s.to_string())),
        }
    }
}

/// What the view buttons select: a filtered plot or the evolution animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSelection {
    Filter(ViewFilter),
    Evolution,
}

impl ViewSelection {
    pub fn key(self) -> &'static str {
        match self {
            ViewSelection::Filter(f) => f.key(),
            ViewSelection::Evolution => "evolution",
        }
    }
}

impl FromStr for ViewSelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("evolution") {
            return Ok(ViewSelection::Evolution);
        }
        s.parse().map(ViewSelection::Filter)
    }
}

/// Ordered subsequence of `stars` matching `predicate`; original order is kept.
pub fn filter_stars<'a, P>(stars: &'a [Star], predicate: P) -> Vec<&'a Star>
where
    P: Fn(&Star) -> bool,
{
    stars.iter().filter(|&s| predicate(s)).collect()
}

pub fn visible_stars(stars: &[Star], view: ViewFilter) -> Vec<&Star> {
    filter_stars(stars, |s| view.matches(s.category))
}

/// Full frame for a static view: clear, axes, then one marker per visible star.
pub fn view_frame(mapper: &CoordinateMapper, stars: &[&Star], view: ViewFilter) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear];
    commands.extend(directive::axes(mapper));
    for star in stars {
        let size = view.marker_size(star.category);
        commands.extend(directive::star_marker(
            mapper.star_position(star),
            star.display_color,
            size,
            1.0,
        ));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::STARS;

    #[test]
    fn given_giants_view_then_includes_supergiants() {
        let names: Vec<_> = visible_stars(&STARS, ViewFilter::Giants)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Red Giant",
                "Red Supergiant",
                "Orange Giant",
                "Blue Supergiant",
                "Blue-White Supergiant"
            ]
        );
    }

    #[test]
    fn given_predicate_matching_nothing_then_empty() {
        assert!(filter_stars(&STARS, |s| s.temperature > 1e6).is_empty());
    }

    #[test]
    fn given_all_view_then_marker_sizes_depend_on_category() {
        assert_eq!(ViewFilter::All.marker_size(StarCategory::Supergiant), 10.0);
        assert_eq!(ViewFilter::All.marker_size(StarCategory::MainSequence), 8.0);
        assert_eq!(ViewFilter::All.marker_size(StarCategory::WhiteDwarf), 6.0);
        assert_eq!(ViewFilter::Giants.marker_size(StarCategory::Giant), 12.0);
    }

    #[test]
    fn given_view_keys_when_parsing_selection_then_resolves() {
        assert_eq!(
            "evolution".parse::<ViewSelection>(),
            Ok(ViewSelection::Evolution)
        );
        assert_eq!(
            "Dwarfs".parse::<ViewSelection>(),
            Ok(ViewSelection::Filter(ViewFilter::WhiteDwarfs))
        );
        assert!("giant".parse::<ViewSelection>().is_err());
    }

    #[test]
    fn given_view_frame_then_starts_with_clear_and_has_two_circles_per_star() {
        let mapper = CoordinateMapper::default();
        let stars = visible_stars(&STARS, ViewFilter::WhiteDwarfs);
        let frame = view_frame(&mapper, &stars, ViewFilter::WhiteDwarfs);
        assert_eq!(frame[0], DrawCommand::Clear);
        assert_eq!(frame.iter().filter(|c| c.is_circle()).count(), 6);
    }
}
