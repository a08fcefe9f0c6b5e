use std::{cell::RefCell, rc::Rc, vec::Vec};

use super::*;
use crate::gesture::{
    buffer::POINT_BUFFER_CAPACITY,
    trace::{RecognitionOutcome, RejectReason},
};

type Detected = Rc<RefCell<Vec<Letter>>>;

fn tracker() -> (GestureTracker<impl FnMut(Letter)>, Detected) {
    let detected: Detected = Rc::default();
    let sink = Rc::clone(&detected);
    let tracker = GestureTracker::new(GestureMetrics::default(), move |letter| {
        sink.borrow_mut().push(letter)
    });
    (tracker, detected)
}

const NOT_HANDLED: TrackerOutput = TrackerOutput {
    handled: false,
    disallow_intercept: false,
    redraw: false,
};

const CAPTURED: TrackerOutput = TrackerOutput {
    handled: true,
    disallow_intercept: true,
    redraw: true,
};

/// Press on the first point, move through the middle, release on the last.
fn stroke(points: &[(f32, f32)]) -> Vec<PointerEvent> {
    let last = points.len() - 1;
    points
        .iter()
        .enumerate()
        .map(|(idx, &(x, y))| {
            let t_ms = idx as u64 * 16;
            match idx {
                0 => PointerEvent::press(t_ms, x, y),
                i if i == last => PointerEvent::release(t_ms, x, y),
                _ => PointerEvent::moved(t_ms, x, y),
            }
        })
        .collect()
}

fn ring_points() -> Vec<(f32, f32)> {
    (0..16)
        .map(|k| {
            let theta = core::f32::consts::TAU * k as f32 / 15.0;
            (100.0 + 60.0 * theta.cos(), 100.0 + 60.0 * theta.sin())
        })
        .collect()
}

#[test]
fn l_stroke_is_captured_and_recognized() {
    let (mut tracker, detected) = tracker();
    let events = stroke(&[(0.0, 0.0), (0.0, 100.0), (0.0, 200.0), (100.0, 200.0)]);

    assert_eq!(tracker.on_event(events[0]), NOT_HANDLED);
    assert_eq!(tracker.state_id(), TrackerStateId::TrackingSubthreshold);

    assert_eq!(tracker.on_event(events[1]), CAPTURED);
    assert_eq!(tracker.state_id(), TrackerStateId::TrackingCaptured);

    let moved = tracker.on_event(events[2]);
    assert!(moved.handled && moved.redraw);
    assert_eq!(tracker.trail_points().len(), 3);

    let released = tracker.on_event(events[3]);
    assert!(released.handled);
    assert!(released.redraw);

    assert_eq!(*detected.borrow(), [Letter::L]);
    assert_eq!(tracker.state_id(), TrackerStateId::Idle);
    assert!(tracker.buffered_points().is_empty());
    assert_eq!(
        tracker.last_trace().map(|trace| trace.outcome),
        Some(RecognitionOutcome::Recognized(Letter::L))
    );
}

#[test]
fn closed_loop_reports_o() {
    let (mut tracker, detected) = tracker();
    for event in stroke(&ring_points()) {
        let _ = tracker.on_event(event);
    }
    assert_eq!(*detected.borrow(), [Letter::O]);
    assert!(tracker.last_trace().is_some_and(|trace| trace.circular));
}

#[test]
fn z_stroke_reports_z() {
    let (mut tracker, detected) = tracker();
    for event in stroke(&[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0)]) {
        let _ = tracker.on_event(event);
    }
    assert_eq!(*detected.borrow(), [Letter::Z]);
}

#[test]
fn captured_stroke_without_a_match_fires_nothing() {
    let (mut tracker, detected) = tracker();
    let events = stroke(&[(0.0, 50.0), (50.0, 50.0), (100.0, 50.0), (150.0, 50.0)]);
    let mut last = TrackerOutput::default();
    for event in events {
        last = tracker.on_event(event);
    }
    assert!(last.handled);
    assert!(detected.borrow().is_empty());
    assert_eq!(
        tracker.last_trace().map(|trace| trace.outcome),
        Some(RecognitionOutcome::Rejected(RejectReason::NoMatchingRule))
    );
}

#[test]
fn drags_below_threshold_pass_through() {
    let (mut tracker, detected) = tracker();
    let events = stroke(&[(50.0, 50.0), (60.0, 55.0), (70.0, 50.0), (55.0, 65.0), (60.0, 60.0)]);
    for event in events {
        assert_eq!(tracker.on_event(event), NOT_HANDLED);
    }
    assert!(detected.borrow().is_empty());
    assert!(tracker.last_trace().is_none());
    assert_eq!(tracker.state_id(), TrackerStateId::Idle);
}

#[test]
fn threshold_distance_itself_captures() {
    let (mut tracker, _) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 50.0, 50.0));
    assert_eq!(tracker.on_event(PointerEvent::moved(10, 79.0, 50.0)), NOT_HANDLED);
    assert!(tracker.trail_points().is_empty());
    assert_eq!(tracker.on_event(PointerEvent::moved(20, 80.0, 50.0)), CAPTURED);
    assert_eq!(tracker.trail_points().len(), 3);
}

#[test]
fn release_and_cancel_leave_an_empty_buffer() {
    let (mut tracker, _) = tracker();
    for event in stroke(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)]) {
        let _ = tracker.on_event(event);
    }
    assert!(tracker.buffered_points().is_empty());

    let _ = tracker.on_event(PointerEvent::press(100, 10.0, 10.0));
    assert_eq!(tracker.buffered_points(), &[GesturePoint::new(10.0, 10.0)]);
    let _ = tracker.on_event(PointerEvent::moved(110, 10.0, 90.0));
    let _ = tracker.on_event(PointerEvent::cancel(120));
    assert!(tracker.buffered_points().is_empty());
    assert_eq!(tracker.state_id(), TrackerStateId::Idle);
}

#[test]
fn cancel_skips_recognition_and_is_not_handled() {
    let (mut tracker, detected) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 0.0, 0.0));
    let _ = tracker.on_event(PointerEvent::moved(16, 0.0, 100.0));
    let _ = tracker.on_event(PointerEvent::moved(32, 0.0, 200.0));

    let cancelled = tracker.on_event(PointerEvent::cancel(48));
    assert!(!cancelled.handled);
    assert!(!cancelled.disallow_intercept);
    assert!(cancelled.redraw);

    let late_release = tracker.on_event(PointerEvent::release(64, 100.0, 200.0));
    assert_eq!(late_release, NOT_HANDLED);
    assert!(detected.borrow().is_empty());
    assert!(tracker.last_trace().is_none());
}

#[test]
fn release_below_threshold_is_not_handled() {
    let (mut tracker, _) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 0.0, 0.0));
    assert_eq!(
        tracker.on_event(PointerEvent::release(30, 5.0, 5.0)),
        NOT_HANDLED
    );
}

#[test]
fn disabling_mid_gesture_discards_it() {
    let (mut tracker, detected) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 0.0, 0.0));
    let _ = tracker.on_event(PointerEvent::moved(16, 0.0, 100.0));
    let _ = tracker.on_event(PointerEvent::moved(32, 0.0, 200.0));

    let disabled = tracker.set_enabled(false);
    assert!(disabled.redraw);
    assert!(!disabled.handled);
    assert!(!tracker.is_enabled());
    assert_eq!(tracker.state_id(), TrackerStateId::Idle);

    assert_eq!(
        tracker.on_event(PointerEvent::release(48, 100.0, 200.0)),
        NOT_HANDLED
    );
    assert_eq!(tracker.on_event(PointerEvent::press(64, 0.0, 0.0)), NOT_HANDLED);
    assert_eq!(tracker.state_id(), TrackerStateId::Idle);
    assert!(detected.borrow().is_empty());

    assert_eq!(tracker.set_enabled(true), NOT_HANDLED);
    for event in stroke(&[(0.0, 0.0), (0.0, 100.0), (0.0, 200.0), (100.0, 200.0)]) {
        let _ = tracker.on_event(event);
    }
    assert_eq!(*detected.borrow(), [Letter::L]);
}

#[test]
fn disabling_while_idle_requests_nothing() {
    let (mut tracker, _) = tracker();
    assert_eq!(tracker.set_enabled(false), NOT_HANDLED);
    assert_eq!(tracker.set_enabled(false), NOT_HANDLED);
}

#[test]
fn forwarded_stream_never_claims_exclusivity() {
    let (mut tracker, detected) = tracker();
    let events = stroke(&[(0.0, 0.0), (0.0, 100.0), (0.0, 200.0), (100.0, 200.0)]);
    let outputs: Vec<TrackerOutput> = events
        .into_iter()
        .map(|event| tracker.forward_event(event))
        .collect();

    assert!(outputs.iter().all(|output| !output.disallow_intercept));
    assert!(outputs[1].handled && outputs[1].redraw);
    assert_eq!(*detected.borrow(), [Letter::L]);
}

#[test]
fn trace_reports_buffer_overflow() {
    let (mut tracker, _) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 0.0, 0.0));
    for i in 1..=1100u64 {
        let _ = tracker.on_event(PointerEvent::moved(i, 0.0, i as f32 * 0.2));
    }
    let _ = tracker.on_event(PointerEvent::release(1101, 100.0, 220.0));

    let trace = tracker.last_trace().unwrap();
    assert!(trace.overflowed);
    assert_eq!(trace.raw_points, POINT_BUFFER_CAPACITY);

    for event in stroke(&[(0.0, 0.0), (0.0, 100.0), (0.0, 200.0), (100.0, 200.0)]) {
        let _ = tracker.on_event(event);
    }
    assert!(!tracker.last_trace().unwrap().overflowed);
}

#[test]
fn press_while_tracking_restarts_the_gesture() {
    let (mut tracker, detected) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 0.0, 0.0));
    let _ = tracker.on_event(PointerEvent::moved(16, 0.0, 100.0));

    let restarted = tracker.on_event(PointerEvent::press(32, 200.0, 200.0));
    assert!(!restarted.handled);
    assert!(restarted.redraw);
    assert_eq!(tracker.state_id(), TrackerStateId::TrackingSubthreshold);
    assert_eq!(tracker.buffered_points(), &[GesturePoint::new(200.0, 200.0)]);
    assert!(detected.borrow().is_empty());
}

#[test]
fn density_scales_the_drag_threshold() {
    let mut tracker = GestureTracker::with_density(2.0, |_| {});
    assert_eq!(tracker.metrics().drag_threshold_px, 60.0);
    let _ = tracker.on_event(PointerEvent::press(0, 0.0, 0.0));
    assert_eq!(tracker.on_event(PointerEvent::moved(16, 0.0, 40.0)), NOT_HANDLED);
    assert_eq!(tracker.on_event(PointerEvent::moved(32, 0.0, 60.0)), CAPTURED);
}

#[test]
fn identical_streams_produce_identical_traces() {
    let events = stroke(&[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0)]);
    let (mut first, _) = tracker();
    let (mut second, _) = tracker();
    for event in &events {
        assert_eq!(first.on_event(*event), second.on_event(*event));
    }
    assert!(first.last_trace().is_some());
    assert_eq!(first.last_trace(), second.last_trace());
}

#[cfg(feature = "graphics")]
#[test]
fn trail_is_drawn_only_while_captured() {
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::BinaryColor, prelude::*};

    let (mut tracker, _) = tracker();
    let _ = tracker.on_event(PointerEvent::press(0, 5.0, 5.0));
    let _ = tracker.on_event(PointerEvent::moved(10, 5.0, 20.0));

    let mut idle_display = MockDisplay::<BinaryColor>::new();
    tracker.draw_trail(BinaryColor::On, &mut idle_display).unwrap();
    assert!(idle_display.affected_area().is_zero_sized());

    let _ = tracker.on_event(PointerEvent::moved(20, 5.0, 50.0));
    let mut display = MockDisplay::<BinaryColor>::new();
    display.set_allow_overdraw(true);
    tracker.draw_trail(BinaryColor::On, &mut display).unwrap();
    assert_eq!(display.get_pixel(Point::new(5, 30)), Some(BinaryColor::On));
}
