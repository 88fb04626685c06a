//! Star table: filtering, sorting and the sort-button state.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{Star, StarCategory};
use crate::domain::error::DomainError;
use crate::domain::view::filter_stars;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Temperature,
    Luminosity,
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Temperature,
        SortKey::Luminosity,
        SortKey::Category,
    ];

    /// Column id as used by the sort buttons.
    pub fn key(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Temperature => "temp",
            SortKey::Luminosity => "lum",
            SortKey::Category => "type",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Temperature => "Temperature (K)",
            SortKey::Luminosity => "Luminosity (L☉)",
            SortKey::Category => "Type",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "temp" | "temperature" => Ok(SortKey::Temperature),
            "lum" | "luminosity" => Ok(SortKey::Luminosity),
            "type" | "category" => Ok(SortKey::Category),
            _ => Err(DomainError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Value for the column header's `aria-sort` attribute.
    pub fn aria(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(DomainError::UnknownSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// `aria-sort` for `column` while this sort is active.
    pub fn aria_for(&self, column: SortKey) -> &'static str {
        if column == self.key {
            self.direction.aria()
        } else {
            "none"
        }
    }
}

/// Table filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFilter {
    #[default]
    All,
    Category(StarCategory),
}

impl TableFilter {
    pub fn matches(self, star: &Star) -> bool {
        match self {
            TableFilter::All => true,
            TableFilter::Category(c) => star.category == c,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TableFilter::All => "all",
            TableFilter::Category(c) => c.key(),
        }
    }
}

impl FromStr for TableFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TableFilter::All);
        }
        s.parse().map(TableFilter::Category)
    }
}

/// Collation for text columns: case-insensitive first, exact order as tie-break.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

fn compare_by(key: SortKey, a: &Star, b: &Star) -> Ordering {
    match key {
        SortKey::Name => locale_compare(a.name, b.name),
        SortKey::Temperature => a.temperature.total_cmp(&b.temperature),
        SortKey::Luminosity => a.luminosity.total_cmp(&b.luminosity),
        SortKey::Category => locale_compare(a.category_label(), b.category_label()),
    }
}

/// Sort rows by `key`. Descending is the exact reverse of ascending, ties included.
pub fn sort_stars<'a>(stars: &[&'a Star], key: SortKey, direction: SortDirection) -> Vec<&'a Star> {
    let mut rows = stars.to_vec();
    rows.sort_by(|a, b| compare_by(key, a, b));
    if direction == SortDirection::Descending {
        rows.reverse();
    }
    rows
}

/// Filter and sort selections of the table. Rows are recomputed from the catalog
/// on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    filter: TableFilter,
    sort: Option<SortState>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> TableFilter {
        self.filter
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn set_filter(&mut self, filter: TableFilter) {
        self.filter = filter;
    }

    /// A request on the active column flips direction; any other column starts ascending.
    pub fn request_sort(&mut self, key: SortKey) -> SortState {
        let next = match self.sort {
            Some(current) if current.key == key => SortState {
                key,
                direction: current.direction.toggled(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        };
        self.sort = Some(next);
        next
    }

    pub fn rows<'a>(&self, catalog: &'a [Star]) -> Vec<&'a Star> {
        let filter = self.filter;
        let filtered = filter_stars(catalog, |s| filter.matches(s));
        match self.sort {
            Some(s) => sort_stars(&filtered, s.key, s.direction),
            None => filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_then_compares_case_insensitively() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn given_repeated_requests_when_sorting_then_toggles_and_resets() {
        let mut state = TableState::new();
        assert_eq!(
            state.request_sort(SortKey::Name).direction,
            SortDirection::Ascending
        );
        assert_eq!(
            state.request_sort(SortKey::Name).direction,
            SortDirection::Descending
        );
        assert_eq!(
            state.request_sort(SortKey::Luminosity).direction,
            SortDirection::Ascending
        );
    }

    #[test]
    fn given_active_sort_then_aria_marks_only_that_column() {
        let state = SortState {
            key: SortKey::Temperature,
            direction: SortDirection::Descending,
        };
        assert_eq!(state.aria_for(SortKey::Temperature), "descending");
        assert_eq!(state.aria_for(SortKey::Name), "none");
    }

    #[test]
    fn given_filter_keys_when_parsing_then_resolves() {
        assert_eq!("all".parse::<TableFilter>(), Ok(TableFilter::All));
        assert_eq!(
            "supergiant".parse::<TableFilter>(),
            Ok(TableFilter::Category(StarCategory::Supergiant))
        );
        assert!("giants".parse::<TableFilter>().is_err());
    }
}
