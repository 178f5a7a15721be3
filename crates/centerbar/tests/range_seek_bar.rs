use std::sync::{Arc, Mutex};

use centerbar::prelude::*;

type Calls = Arc<Mutex<Vec<(&'static str, f64)>>>;

fn range_seek_bar(from_value: f64, to_value: f64) -> (RangeSeekBar, Calls) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let config = RangeSeekBarConfig {
        from_value,
        to_value,
        ..Default::default()
    };
    let mut bar = RangeSeekBar::new(config, 2.fct(), TouchConfig::default()).unwrap();
    // padding 14px at scale 2, usable width 200
    bar.layout(PxSize::new(Px(228.0), Px(40.0)));

    let calls = Calls::default();
    let c = calls.clone();
    bar.on_from_value_change(move |v| c.lock().unwrap().push(("from", v)));
    let c = calls.clone();
    bar.on_to_value_change(move |v| c.lock().unwrap().push(("to", v)));
    (bar, calls)
}

fn ev(action: PointerAction, x: f32) -> PointerEvent {
    PointerEvent::single(action, Px(x), Px(20.0))
}

#[test]
fn direction_selects_listener() {
    let (mut bar, calls) = range_seek_bar(-10.0, 1000.0);

    // thumb starts at the center, x=114
    assert!(bar.pointer_event(&ev(PointerAction::Down, 114.0)));
    bar.pointer_event(&ev(PointerAction::Move, 164.0));
    assert_eq!(ThumbDirection::Right, bar.direction());
    assert_eq!(Some(500.0), bar.value());

    bar.pointer_event(&ev(PointerAction::Move, 64.0));
    assert_eq!(ThumbDirection::Left, bar.direction());
    assert_eq!(Some(-5.0), bar.value());

    bar.pointer_event(&ev(PointerAction::Up, 14.0));

    assert_eq!(vec![("to", 500.0), ("from", -5.0), ("from", -10.0)], *calls.lock().unwrap());
}

#[test]
fn progress_segment_follows_direction() {
    let (mut bar, _) = range_seek_bar(-100.0, 100.0);

    bar.set_to_progress(50.0);
    let mut frame = DisplayList::new();
    bar.render(&mut frame);
    let DisplayItem::Rect { rect, color } = &frame.items()[1] else {
        panic!("expected progress rect")
    };
    assert_eq!(Px(114.0), rect.origin.x);
    assert_eq!(Px(50.0), rect.size.width);
    assert_eq!(Rgba::rgb(0x33, 0xB5, 0xE5), *color);

    bar.set_from_progress(-25.0);
    frame.clear();
    bar.render(&mut frame);
    let DisplayItem::Rect { rect, .. } = &frame.items()[1] else {
        panic!("expected progress rect")
    };
    assert_eq!(Px(89.0), rect.origin.x);
    assert_eq!(Px(25.0), rect.size.width);
}

#[test]
fn setters_clamp_silently() {
    let (mut bar, calls) = range_seek_bar(-100.0, 100.0);
    bar.set_to_progress(300.0);
    assert_eq!(100.0, bar.internal_value());
    bar.set_from_progress(-300.0);
    assert_eq!(-100.0, bar.internal_value());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn disabled() {
    let (mut bar, calls) = range_seek_bar(-100.0, 100.0);
    bar.set_enabled(false);
    assert!(!bar.pointer_event(&ev(PointerAction::Down, 114.0)));
    assert!(!bar.pointer_event(&ev(PointerAction::Up, 200.0)));
    assert_eq!(0.0, bar.internal_value());
    assert!(calls.lock().unwrap().is_empty());
}
