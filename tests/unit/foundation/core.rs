use super::*;

#[test]
fn frame_window_contains_is_half_open() {
    let w = FrameWindow::new(2.0, 5.0).unwrap();
    assert!(!w.contains(1.0));
    assert!(w.contains(2.0));
    assert!(w.contains(4.5));
    assert!(!w.contains(5.0));
}

#[test]
fn frame_window_rejects_negative_and_inverted() {
    assert!(FrameWindow::new(-1.0, 5.0).is_err());
    assert!(FrameWindow::new(6.0, 5.0).is_err());
    assert!(FrameWindow::new(0.0, f64::NAN).is_err());
    assert!(FrameWindow::new(3.0, 3.0).unwrap().is_instant());
}

#[test]
fn touching_windows_do_not_overlap() {
    let a = FrameWindow::new(0.0, 10.0).unwrap();
    let b = FrameWindow::new(10.0, 20.0).unwrap();
    let c = FrameWindow::new(9.0, 12.0).unwrap();
    assert!(!a.overlaps(b));
    assert!(!b.overlaps(a));
    assert!(a.overlaps(c));
    assert!(c.overlaps(b));
    assert_eq!(a.union(b), FrameWindow::new(0.0, 20.0).unwrap());
}

#[test]
fn color_channels_are_range_checked() {
    assert_eq!(Rgb8::from_channels(1, 2, 3).unwrap(), Rgb8::new(1, 2, 3));
    assert!(Rgb8::from_channels(321, 0, 255).is_err());
    assert!(Rgb8::from_channels(0, -4, 255).is_err());
    assert!(Rgb8::from_channels(0, 72, 256).is_err());
}

#[test]
fn color_lerp_rounds_to_nearest() {
    let red = Rgb8::new(255, 0, 0);
    let blue = Rgb8::new(0, 0, 255);
    assert_eq!(red.lerp(blue, 0.0), red);
    assert_eq!(red.lerp(blue, 1.0), blue);
    assert_eq!(red.lerp(blue, 0.5), Rgb8::new(128, 0, 128));
}

#[test]
fn color_serializes_as_triplet() {
    let s = serde_json::to_string(&Rgb8::new(10, 20, 30)).unwrap();
    assert_eq!(s, "[10,20,30]");
    let c: Rgb8 = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));
}

#[test]
fn checks_reject_invalid_geometry() {
    assert!(check_frame(-0.5).is_err());
    assert!(check_frame(0.0).is_ok());
    assert!(check_position(Point::new(-1.0, 0.0)).is_err());
    assert!(check_position(Point::new(0.0, 0.0)).is_ok());
    assert!(check_dimension(0.0, "base").is_err());
    assert!(check_dimension(2.0, "base").is_ok());
}

#[test]
fn bounds_reject_empty_rect() {
    assert!(Bounds::new(0, 0, 0, 10).is_err());
    assert_eq!(
        Bounds::new(-5, 10, 360, 240).unwrap(),
        Bounds {
            x: -5,
            y: 10,
            width: 360,
            height: 240
        }
    );
}
