//! Domain entities: the star catalog and the evolutionary path

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Broad class of a star on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarCategory {
    MainSequence,
    Giant,
    Supergiant,
    WhiteDwarf,
}

impl StarCategory {
    pub const ALL: [StarCategory; 4] = [
        StarCategory::MainSequence,
        StarCategory::Giant,
        StarCategory::Supergiant,
        StarCategory::WhiteDwarf,
    ];

    /// Short key used by filter inputs (`main`, `giant`, `supergiant`, `dwarf`).
    pub fn key(self) -> &'static str {
        match self {
            StarCategory::MainSequence => "main",
            StarCategory::Giant => "giant",
            StarCategory::Supergiant => "supergiant",
            StarCategory::WhiteDwarf => "dwarf",
        }
    }

    /// Human-readable label shown in the table's type column.
    pub fn label(self) -> &'static str {
        match self {
            StarCategory::MainSequence => "Main Sequence",
            StarCategory::Giant => "Giant",
            StarCategory::Supergiant => "Supergiant",
            StarCategory::WhiteDwarf => "White Dwarf",
        }
    }
}

impl fmt::Display for StarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StarCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        StarCategory::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// A catalog star.
///
/// `temperature` (Kelvin) and `luminosity` (solar units) are strictly positive,
/// which the logarithmic plot axes rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub name: &'static str,
    pub temperature: f64,
    pub luminosity: f64,
    pub category: StarCategory,
    pub display_color: &'static str,
}

impl Star {
    pub const fn new(
        name: &'static str,
        temperature: f64,
        luminosity: f64,
        category: StarCategory,
        display_color: &'static str,
    ) -> Self {
        Self {
            name,
            temperature,
            luminosity,
            category,
            display_color,
        }
    }

    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }

    /// Detail sentence used by the star detail panel.
    pub fn details(&self) -> String {
        format!(
            "Temperature: {}K, Luminosity: {} solar units, Type: {}",
            format_thousands(self.temperature),
            format_luminosity(self.luminosity),
            self.category_label()
        )
    }
}

/// One point on the evolutionary path of a Sun-like star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionStep {
    pub temperature: f64,
    pub luminosity: f64,
    pub phase: &'static str,
    pub age: &'static str,
}

impl EvolutionStep {
    pub const fn new(temperature: f64, luminosity: f64, phase: &'static str, age: &'static str) -> Self {
        Self {
            temperature,
            luminosity,
            phase,
            age,
        }
    }
}

use StarCategory::{Giant, MainSequence, Supergiant, WhiteDwarf};

/// The diagram's dataset, in display order.
pub const STARS: [Star; 15] = [
    Star::new("O-type Star", 30000.0, 100000.0, MainSequence, "#4488ff"),
    Star::new("B-type Star", 20000.0, 10000.0, MainSequence, "#6699ff"),
    Star::new("A-type Star", 10000.0, 100.0, MainSequence, "#aabbff"),
    Star::new("F-type Star", 7000.0, 10.0, MainSequence, "#ffffff"),
    Star::new("Sun (G-type)", 5778.0, 1.0, MainSequence, "#ffff44"),
    Star::new("K-type Star", 4500.0, 0.1, MainSequence, "#ff8844"),
    Star::new("M-type Star", 3000.0, 0.01, MainSequence, "#ff4444"),
    Star::new("Red Giant", 4000.0, 1000.0, Giant, "#ff6644"),
    Star::new("Red Supergiant", 3500.0, 5000.0, Giant, "#ff4422"),
    Star::new("Orange Giant", 4500.0, 800.0, Giant, "#ff8844"),
    Star::new("Blue Supergiant", 15000.0, 50000.0, Supergiant, "#4488ff"),
    Star::new("Blue-White Supergiant", 12000.0, 20000.0, Supergiant, "#6699ff"),
    Star::new("Hot White Dwarf", 8000.0, 0.001, WhiteDwarf, "#ffffff"),
    Star::new("White Dwarf", 6000.0, 0.0005, WhiteDwarf, "#eeeeee"),
    Star::new("Cool White Dwarf", 4000.0, 0.0001, WhiteDwarf, "#cccccc"),
];

/// The life of a Sun-like star, in narrative order.
pub const EVOLUTION_PATH: [EvolutionStep; 6] = [
    EvolutionStep::new(5778.0, 1.0, "Main Sequence (Current Sun)", "4.6 billion years"),
    EvolutionStep::new(5400.0, 2.2, "Slightly Evolved Sun", "8 billion years"),
    EvolutionStep::new(5000.0, 4.0, "Subgiant Phase", "9 billion years"),
    EvolutionStep::new(4000.0, 1000.0, "Red Giant Phase", "9.5 billion years"),
    EvolutionStep::new(3500.0, 2000.0, "Red Giant Tip", "9.7 billion years"),
    EvolutionStep::new(6000.0, 0.0005, "White Dwarf Remnant", "10+ billion years"),
];

pub fn catalog() -> &'static [Star] {
    &STARS
}

/// Format a number rounded to an integer with `,` thousands separators: `30000.0` → `30,000`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Luminosities print in shortest plain decimal form: `1`, `2.2`, `0.0005`.
pub fn format_luminosity(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_catalog_then_has_fifteen_positive_stars() {
        assert_eq!(catalog().len(), 15);
        assert!(catalog()
            .iter()
            .all(|s| s.temperature > 0.0 && s.luminosity > 0.0));
    }

    #[test]
    fn given_numbers_when_formatting_thousands_then_groups_digits() {
        assert_eq!(format_thousands(30000.0), "30,000");
        assert_eq!(format_thousands(5778.0), "5,778");
        assert_eq!(format_thousands(100000.0), "100,000");
        assert_eq!(format_thousands(800.0), "800");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
    }

    #[test]
    fn given_luminosities_when_formatting_then_no_trailing_zeroes() {
        assert_eq!(format_luminosity(1.0), "1");
        assert_eq!(format_luminosity(2.2), "2.2");
        assert_eq!(format_luminosity(0.0005), "0.0005");
        assert_eq!(format_luminosity(100000.0), "100000");
    }

    #[test]
    fn given_category_keys_when_parsing_then_roundtrips_and_rejects_unknown() {
        for category in StarCategory::ALL {
            assert_eq!(category.key().parse::<StarCategory>(), Ok(category));
        }
        assert_eq!(" Dwarf ".parse::<StarCategory>(), Ok(StarCategory::WhiteDwarf));
        assert!(matches!(
            "neutron".parse::<StarCategory>(),
            Err(DomainError::UnknownCategory(_))
        ));
    }

    #[test]
    fn given_sun_then_details_sentence_matches_panel_format() {
        let sun = STARS[4];
        assert_eq!(
            sun.details(),
            "Temperature: 5,778K, Luminosity: 1 solar units, Type: Main Sequence"
        );
    }
}
