//! Tests for the logarithmic coordinate mapper

use rstest::rstest;

use hrdiagram::domain::mapper::Axis;
use hrdiagram::domain::{CoordinateMapper, PlotGeometry, Point, STARS};
use hrdiagram::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(30000.0, 80.0)]
#[case(3000.0, 720.0)]
#[case(9486.832980505138, 400.0)] // geometric mean of the range lands mid-axis
fn given_temperature_when_mapping_then_x_is_log_scaled_and_reversed(
    #[case] temperature: f64,
    #[case] expected_x: f64,
) {
    let mapper = CoordinateMapper::default();
    assert_close(mapper.temperature_to_x(temperature), expected_x);
}

#[rstest]
#[case(100000.0, 80.0)]
#[case(0.0001, 520.0)]
#[case(1.0, 520.0 - 440.0 * 4.0 / 9.0)]
fn given_luminosity_when_mapping_then_y_is_log_scaled_upward(
    #[case] luminosity: f64,
    #[case] expected_y: f64,
) {
    let mapper = CoordinateMapper::default();
    assert_close(mapper.luminosity_to_y(luminosity), expected_y);
}

#[test]
fn given_hotter_star_when_mapping_then_lands_further_left() {
    let mapper = CoordinateMapper::default();
    let temps = [3000.0, 3500.0, 4500.0, 5778.0, 10000.0, 20000.0, 30000.0];
    for pair in temps.windows(2) {
        assert!(mapper.temperature_to_x(pair[1]) < mapper.temperature_to_x(pair[0]));
    }
}

#[test]
fn given_brighter_star_when_mapping_then_lands_higher() {
    let mapper = CoordinateMapper::default();
    let lums = [0.0001, 0.001, 0.01, 1.0, 100.0, 10000.0, 100000.0];
    for pair in lums.windows(2) {
        assert!(mapper.luminosity_to_y(pair[1]) < mapper.luminosity_to_y(pair[0]));
    }
}

#[test]
fn given_same_input_when_mapping_twice_then_identical() {
    let mapper = CoordinateMapper::default();
    for star in &STARS {
        assert_eq!(mapper.star_position(star), mapper.star_position(star));
    }
}

#[test]
fn given_catalog_when_mapping_then_every_star_is_inside_plot_area() {
    let mapper = CoordinateMapper::default();
    let g = PlotGeometry::default();
    for star in &STARS {
        let Point { x, y } = mapper.star_position(star);
        assert!((g.left..=g.right).contains(&x), "{} x={}", star.name, x);
        assert!((g.top..=g.bottom).contains(&y), "{} y={}", star.name, y);
    }
}

#[test]
fn given_custom_geometry_when_mapping_then_range_follows_edges() {
    let geometry = PlotGeometry {
        left: 0.0,
        right: 100.0,
        top: 0.0,
        bottom: 100.0,
        ..PlotGeometry::default()
    };
    let mapper = CoordinateMapper::new(geometry);
    assert_close(mapper.temperature_to_x(30000.0), 0.0);
    assert_close(mapper.luminosity_to_y(0.0001), 100.0);
}

#[test]
fn given_ticks_when_listed_then_positions_agree_with_mapping() {
    let mapper = CoordinateMapper::default();
    let ticks = mapper.ticks();
    assert!(ticks.iter().any(|t| t.axis == Axis::Temperature));
    assert!(ticks.iter().any(|t| t.axis == Axis::Luminosity));
    for tick in ticks {
        match tick.axis {
            Axis::Temperature => assert_close(tick.position.x, mapper.temperature_to_x(tick.value)),
            Axis::Luminosity => assert_close(tick.position.y, mapper.luminosity_to_y(tick.value)),
        }
    }
}
