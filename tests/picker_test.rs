//! Tests for nearest-star picking on the plot

use hrdiagram::domain::{
    pick_nearest, visible_stars, CoordinateMapper, Point, Star, ViewFilter, DEFAULT_PICK_RADIUS,
    STARS,
};
use hrdiagram::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn star(name: &str) -> &'static Star {
    STARS
        .iter()
        .find(|s| s.name == name)
        .expect("star in catalog")
}

#[test]
fn given_point_on_sun_when_picking_main_sequence_then_returns_sun() {
    let mapper = CoordinateMapper::default();
    let visible = visible_stars(&STARS, ViewFilter::MainSequence);
    let sun = mapper.star_position(star("Sun (G-type)"));

    let picked = pick_nearest(&mapper, &visible, sun, DEFAULT_PICK_RADIUS);

    assert_eq!(picked.map(|s| s.name), Some("Sun (G-type)"));
}

#[test]
fn given_point_near_but_inside_radius_when_picking_then_returns_star() {
    let mapper = CoordinateMapper::default();
    let visible = visible_stars(&STARS, ViewFilter::MainSequence);
    let sun = mapper.star_position(star("Sun (G-type)"));

    let picked = pick_nearest(
        &mapper,
        &visible,
        Point::new(sun.x + 12.0, sun.y - 5.0),
        DEFAULT_PICK_RADIUS,
    );

    assert_eq!(picked.map(|s| s.name), Some("Sun (G-type)"));
}

#[test]
fn given_point_far_from_every_star_when_picking_then_none() {
    let mapper = CoordinateMapper::default();
    let visible = visible_stars(&STARS, ViewFilter::All);
    assert!(pick_nearest(&mapper, &visible, Point::new(5.0, 5.0), DEFAULT_PICK_RADIUS).is_none());
}

#[test]
fn given_star_hidden_by_view_when_picking_its_position_then_not_selected() {
    let mapper = CoordinateMapper::default();
    let visible = visible_stars(&STARS, ViewFilter::MainSequence);
    let red_giant = mapper.star_position(star("Red Giant"));

    let picked = pick_nearest(&mapper, &visible, red_giant, DEFAULT_PICK_RADIUS);

    assert!(picked.map_or(true, |s| s.name != "Red Giant"));
}

#[test]
fn given_two_stars_at_same_position_when_picking_then_first_wins() {
    let mapper = CoordinateMapper::default();
    let twin = Star::new(
        "Twin Sun",
        5778.0,
        1.0,
        hrdiagram::domain::StarCategory::MainSequence,
        "#ffff44",
    );
    let sun = star("Sun (G-type)");
    let at = mapper.star_position(sun);

    let picked = pick_nearest(&mapper, &[sun, &twin], at, DEFAULT_PICK_RADIUS);
    assert_eq!(picked.map(|s| s.name), Some("Sun (G-type)"));

    let picked = pick_nearest(&mapper, &[&twin, sun], at, DEFAULT_PICK_RADIUS);
    assert_eq!(picked.map(|s| s.name), Some("Twin Sun"));
}

#[test]
fn given_star_exactly_at_radius_when_picking_then_excluded() {
    let mapper = CoordinateMapper::default();
    let sun = star("Sun (G-type)");
    let at = mapper.star_position(sun);
    let radius = 10.0;

    assert!(pick_nearest(&mapper, &[sun], Point::new(at.x + 10.5, at.y), radius).is_none());
    assert!(pick_nearest(&mapper, &[sun], Point::new(at.x + 9.5, at.y), radius).is_some());
}
