//! Tests for view filtering and the frames drawn per view

use rstest::rstest;

use hrdiagram::domain::view::view_frame;
use hrdiagram::domain::{
    filter_stars, visible_stars, CoordinateMapper, DrawCommand, StarCategory, ViewFilter,
    ViewSelection, STARS,
};
use hrdiagram::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(ViewFilter::MainSequence, 7)]
#[case(ViewFilter::Giants, 5)]
#[case(ViewFilter::WhiteDwarfs, 3)]
#[case(ViewFilter::All, 15)]
fn given_view_when_filtering_then_counts_match_catalog(
    #[case] view: ViewFilter,
    #[case] expected: usize,
) {
    assert_eq!(visible_stars(&STARS, view).len(), expected);
}

#[test]
fn given_main_view_when_filtering_then_keeps_catalog_order() {
    let names: Vec<_> = visible_stars(&STARS, ViewFilter::MainSequence)
        .iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "O-type Star",
            "B-type Star",
            "A-type Star",
            "F-type Star",
            "Sun (G-type)",
            "K-type Star",
            "M-type Star",
        ]
    );
}

#[test]
fn given_category_predicate_when_filtering_then_only_that_category_in_order() {
    let giants = filter_stars(&STARS, |s| s.category == StarCategory::Giant);
    let names: Vec<_> = giants.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Red Giant", "Red Supergiant", "Orange Giant"]);
}

#[test]
fn given_empty_catalog_when_filtering_then_empty() {
    assert!(visible_stars(&[], ViewFilter::All).is_empty());
}

#[test]
fn given_view_frame_when_built_then_starts_with_clear_and_marks_each_star_twice() {
    let mapper = CoordinateMapper::default();
    let stars = visible_stars(&STARS, ViewFilter::WhiteDwarfs);
    let frame = view_frame(&mapper, &stars, ViewFilter::WhiteDwarfs);

    assert_eq!(frame.first(), Some(&DrawCommand::Clear));
    assert_eq!(frame.iter().filter(|c| c.is_circle()).count(), 2 * stars.len());
}

#[test]
fn given_all_view_when_sizing_markers_then_giants_are_largest() {
    let view = ViewFilter::All;
    assert!(view.marker_size(StarCategory::Giant) > view.marker_size(StarCategory::MainSequence));
    assert!(
        view.marker_size(StarCategory::MainSequence) > view.marker_size(StarCategory::WhiteDwarf)
    );
}

#[rstest]
#[case("Main Sequence", Some(ViewFilter::MainSequence))]
#[case("Giants", Some(ViewFilter::Giants))]
#[case("Red Supergiants", Some(ViewFilter::Giants))]
#[case("White Dwarfs", Some(ViewFilter::WhiteDwarfs))]
#[case("Neutron Stars", None)]
fn given_legend_label_when_routing_then_selects_view(
    #[case] label: &str,
    #[case] expected: Option<ViewFilter>,
) {
    assert_eq!(ViewFilter::from_legend_label(label), expected);
}

#[test]
fn given_view_keys_when_parsing_then_roundtrip_and_reject_unknown() {
    for view in [
        ViewFilter::MainSequence,
        ViewFilter::Giants,
        ViewFilter::WhiteDwarfs,
        ViewFilter::All,
    ] {
        assert_eq!(view.key().parse::<ViewFilter>(), Ok(view));
    }
    assert_eq!(
        "evolution".parse::<ViewSelection>(),
        Ok(ViewSelection::Evolution)
    );
    assert!("nebulae".parse::<ViewFilter>().is_err());
}

#[test]
fn given_count_when_announcing_then_sentence_names_it() {
    assert_eq!(
        ViewFilter::MainSequence.announcement(7),
        "Showing 7 main sequence stars"
    );
    assert_eq!(ViewFilter::All.announcement(0), "Showing all 0 stars");
}
