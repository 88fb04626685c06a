//! Nearest-star selection on the plot surface.

use crate::domain::entities::Star;
use crate::domain::mapper::{CoordinateMapper, Point};

pub const DEFAULT_PICK_RADIUS: f64 = 20.0;

/// Find the visible star nearest to `at`, strictly within `radius`.
///
/// Ties go to the star seen first, so the result is stable for a fixed input order.
pub fn pick_nearest<'a>(
    mapper: &CoordinateMapper,
    stars: &[&'a Star],
    at: Point,
    radius: f64,
) -> Option<&'a Star> {
    let mut best: Option<(&'a Star, f64)> = None;
    for &star in stars {
        let distance = mapper.star_position(star).distance_to(at);
        if distance >= radius {
            continue;
        }
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((star, distance)),
        }
    }
    best.map(|(star, _)| star)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::STARS;

    #[test]
    fn given_no_stars_then_no_selection() {
        let mapper = CoordinateMapper::default();
        assert!(pick_nearest(&mapper, &[], Point::new(100.0, 100.0), DEFAULT_PICK_RADIUS).is_none());
    }

    #[test]
    fn given_two_stars_at_same_position_then_first_wins() {
        let mapper = CoordinateMapper::default();
        let mut twin = STARS[0];
        twin.name = "Twin";
        let stars = [&STARS[0], &twin];
        let at = mapper.star_position(&STARS[0]);
        let picked = pick_nearest(&mapper, &stars, at, DEFAULT_PICK_RADIUS).unwrap();
        assert_eq!(picked.name, "O-type Star");
    }

    #[test]
    fn given_position_outside_radius_then_not_selected() {
        let mapper = CoordinateMapper::default();
        let star = &STARS[4];
        let p = mapper.star_position(star);
        let stars = [star];
        assert!(pick_nearest(&mapper, &stars, Point::new(p.x + 20.5, p.y), 20.0).is_none());
        assert!(pick_nearest(&mapper, &stars, Point::new(p.x + 19.5, p.y), 20.0).is_some());
    }
}
