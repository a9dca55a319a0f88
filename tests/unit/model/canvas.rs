use super::*;
use crate::foundation::core::{FrameWindow, Point, Rgb8};
use crate::model::shape::ShapeKind;

fn shape(id: &str, kind: ShapeKind) -> Shape {
    Shape::new(id, kind, Point::new(0.0, 0.0), 50.0, 30.0, Rgb8::new(255, 0, 0)).unwrap()
}

fn scene() -> Canvas {
    let mut c = Canvas::new();
    let mut r = shape("R", ShapeKind::Rectangle);
    r.set_lifetime(FrameWindow::new(1.0, 100.0).unwrap());
    c.add_shape(r);
    c.add_shape(shape("C", ShapeKind::Oval));

    c.add_transformation(
        "R",
        Transformation::moving("R", 5.0, 15.0, Point::new(0.0, 0.0), Point::new(100.0, 0.0))
            .unwrap(),
    )
    .unwrap();
    c.add_transformation(
        "R",
        Transformation::resizing("R", 5.0, 15.0, Dimension::Base, 50.0, 75.0).unwrap(),
    )
    .unwrap();
    c.add_transformation(
        "C",
        Transformation::recoloring("C", 5.0, 15.0, Rgb8::new(255, 0, 0), Rgb8::new(0, 0, 255))
            .unwrap(),
    )
    .unwrap();
    c.add_transformation("C", Transformation::visibility("C", 5.0, 15.0).unwrap())
        .unwrap();
    c.set_all_frames();
    c
}

#[test]
fn add_shape_keeps_insertion_order_and_overwrites_in_place() {
    let mut c = Canvas::new();
    assert!(c.add_shape(shape("a", ShapeKind::Rectangle)).is_none());
    assert!(c.add_shape(shape("b", ShapeKind::Rectangle)).is_none());
    let replaced = c.add_shape(shape("a", ShapeKind::Oval)).unwrap();
    assert_eq!(replaced.kind(), ShapeKind::Rectangle);

    let ids: Vec<&str> = c.shapes().iter().map(Shape::id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(c.shape("a").unwrap().kind(), ShapeKind::Oval);
}

#[test]
fn remove_shape_reindexes() {
    let mut c = Canvas::new();
    for id in ["a", "b", "c"] {
        c.add_shape(shape(id, ShapeKind::Rectangle));
    }
    assert_eq!(c.remove_shape("a").unwrap().id(), "a");
    assert!(c.remove_shape("a").is_none());
    assert_eq!(c.len(), 2);
    assert_eq!(c.shape("c").unwrap().id(), "c");
    assert!(matches!(c.shape("a"), Err(EaselError::NotFound(_))));
}

#[test]
fn add_transformation_to_unknown_shape_is_not_found() {
    let mut c = Canvas::new();
    let t = Transformation::visibility("ghost", 0.0, 1.0).unwrap();
    assert!(matches!(
        c.add_transformation("ghost", t),
        Err(EaselError::NotFound(_))
    ));
}

#[test]
fn conflicting_transformation_leaves_canvas_unchanged() {
    let mut c = scene();
    let before = c.shape("R").unwrap().transformations().len();
    let clash =
        Transformation::moving("R", 10.0, 20.0, Point::new(1.0, 1.0), Point::new(2.0, 2.0))
            .unwrap();
    assert!(matches!(
        c.add_transformation("R", clash),
        Err(EaselError::Conflict(_))
    ));
    assert_eq!(c.shape("R").unwrap().transformations().len(), before);
}

#[test]
fn set_all_frames_is_idempotent() {
    let mut c = scene();
    let n = c.shape("R").unwrap().transformations().len();
    c.set_all_frames();
    c.set_all_frames();
    assert_eq!(c.shape("R").unwrap().transformations().len(), n);
    // C has no declared lifetime and an explicit visibility window.
    assert_eq!(c.shape("C").unwrap().transformations().len(), 2);
}

#[test]
fn linear_move_example() {
    let c = scene();
    let x_at = |f: f64| c.shapes_at_frame(f).unwrap()[0].position();
    assert_eq!(x_at(0.0), Point::new(0.0, 0.0));
    assert_eq!(x_at(5.0), Point::new(0.0, 0.0));
    assert_eq!(x_at(10.0), Point::new(50.0, 0.0));
    assert_eq!(x_at(15.0), Point::new(100.0, 0.0));
    assert_eq!(x_at(20.0), Point::new(100.0, 0.0));
}

#[test]
fn resize_carries_untouched_dimension() {
    let c = scene();
    let r = &c.shapes_at_frame(10.0).unwrap()[0];
    assert_eq!(r.base(), 62.5);
    assert_eq!(r.height(), 30.0);
}

#[test]
fn color_and_visibility_example() {
    let c = scene();
    let at = |f: f64| c.shapes_at_frame(f).unwrap().remove(1);
    assert_eq!(at(0.0).color(), Rgb8::new(255, 0, 0));
    assert_eq!(at(10.0).color(), Rgb8::new(128, 0, 128));
    assert_eq!(at(15.0).color(), Rgb8::new(0, 0, 255));
    assert_eq!(at(30.0).color(), Rgb8::new(0, 0, 255));

    assert!(!at(0.0).is_visible());
    assert!(at(5.0).is_visible());
    assert!(at(14.0).is_visible());
    assert!(!at(15.0).is_visible());
    assert!(!at(20.0).is_visible());
}

#[test]
fn derived_lifetime_controls_visibility() {
    let c = scene();
    assert!(!c.shapes_at_frame(0.0).unwrap()[0].is_visible());
    assert!(c.shapes_at_frame(1.0).unwrap()[0].is_visible());
    assert!(c.shapes_at_frame(99.5).unwrap()[0].is_visible());
    assert!(!c.shapes_at_frame(100.0).unwrap()[0].is_visible());
}

#[test]
fn queries_are_idempotent_and_do_not_mutate() {
    let c = scene();
    let before: Vec<Shape> = c.shapes().to_vec();
    let a = c.shapes_at_frame(12.0).unwrap();
    for f in [0.0, 7.5, 12.0, 40.0] {
        c.shapes_at_frame(f).unwrap();
    }
    let b = c.shapes_at_frame(12.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(c.shapes(), before.as_slice());
}

#[test]
fn negative_frame_query_fails() {
    assert!(matches!(
        scene().shapes_at_frame(-1.0),
        Err(EaselError::Validation(_))
    ));
}

#[test]
fn later_windows_govern_regardless_of_insertion_order() {
    let mut c = Canvas::new();
    c.add_shape(shape("s", ShapeKind::Rectangle));
    c.add_transformation(
        "s",
        Transformation::moving("s", 20.0, 30.0, Point::new(10.0, 0.0), Point::new(20.0, 0.0))
            .unwrap(),
    )
    .unwrap();
    c.add_transformation(
        "s",
        Transformation::moving("s", 0.0, 10.0, Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .unwrap(),
    )
    .unwrap();

    let x_at = |f: f64| c.shapes_at_frame(f).unwrap()[0].position().x;
    assert_eq!(x_at(5.0), 5.0);
    assert_eq!(x_at(15.0), 10.0);
    assert_eq!(x_at(25.0), 15.0);
    assert_eq!(x_at(40.0), 20.0);
}

#[test]
fn touching_windows_hand_over_at_the_shared_frame() {
    let mut c = Canvas::new();
    c.add_shape(shape("s", ShapeKind::Rectangle));
    c.add_transformation(
        "s",
        Transformation::moving("s", 0.0, 10.0, Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .unwrap(),
    )
    .unwrap();
    c.add_transformation(
        "s",
        Transformation::moving("s", 10.0, 20.0, Point::new(40.0, 0.0), Point::new(60.0, 0.0))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(c.shapes_at_frame(10.0).unwrap()[0].position().x, 40.0);
}

#[test]
fn reset_dynamic_shapes_restores_added_state() {
    let mut c = scene();
    {
        let r = c.shape_mut("R").unwrap();
        r.set_position(Point::new(9.0, 9.0)).unwrap();
        r.set_visibility(true);
    }
    c.reset_dynamic_shapes();
    let r = c.shape("R").unwrap();
    assert_eq!(r.position(), Point::new(0.0, 0.0));
    assert!(!r.is_visible());
}

#[test]
fn bounds_accessors() {
    let mut c = Canvas::new();
    c.set_canvas_bounds(Bounds::new(200, 70, 360, 360).unwrap());
    assert_eq!(c.left_most_x(), 200);
    assert_eq!(c.top_most_y(), 70);
    assert_eq!(c.border_width(), 360);
    assert_eq!(c.border_height(), 360);
}

#[test]
fn last_frame_spans_all_shapes() {
    assert_eq!(Canvas::new().last_frame(), 0.0);
    assert_eq!(scene().last_frame(), 100.0);
}

#[test]
fn snapshots_follow_shape_order() {
    let snaps = scene().snapshots_at_frame(10.0).unwrap();
    let ids: Vec<&str> = snaps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["R", "C"]);
    assert_eq!(snaps[0].x, 50.0);
}

#[test]
fn visible_baseline_is_hidden_outside_its_window() {
    let mut s = shape("s", ShapeKind::Rectangle);
    s.set_visibility(true);
    let mut c = Canvas::new();
    c.add_shape(s);
    c.add_transformation("s", Transformation::visibility("s", 5.0, 15.0).unwrap())
        .unwrap();

    let visible = |f: f64| c.shapes_at_frame(f).unwrap()[0].is_visible();
    assert!(!visible(0.0));
    assert!(visible(5.0));
    assert!(!visible(15.0));
    assert!(!visible(20.0));
    assert!(c.shape("s").unwrap().is_visible());
}

#[test]
fn separate_visibility_windows_each_show_the_shape() {
    let mut c = Canvas::new();
    c.add_shape(shape("s", ShapeKind::Oval));
    c.add_transformation("s", Transformation::visibility("s", 10.0, 20.0).unwrap())
        .unwrap();
    c.add_transformation("s", Transformation::visibility("s", 0.0, 5.0).unwrap())
        .unwrap();

    let visible = |f: f64| c.shapes_at_frame(f).unwrap()[0].is_visible();
    assert!(visible(2.0));
    assert!(!visible(7.0));
    assert!(visible(12.0));
    assert!(!visible(20.0));
}
