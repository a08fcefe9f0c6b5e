use super::{buffer::POINT_BUFFER_CAPACITY, types::GesturePoint};

pub type ResampledPath = heapless::Vec<GesturePoint, POINT_BUFFER_CAPACITY>;

/// Thins `points` to roughly `segment_length` arc-length spacing.
///
/// The first point is always kept, a raw point is emitted each time the
/// accumulated arc length reaches `segment_length`, and the final raw point
/// is appended if the walk did not end on it. Fewer than two points are
/// returned unchanged.
pub fn resample(points: &[GesturePoint], segment_length: f32) -> ResampledPath {
    let mut out = ResampledPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return out;
    };
    let _ = out.push(first);
    if rest.is_empty() {
        return out;
    }

    let mut accumulated = 0.0f32;
    let mut prev = first;
    let mut ended_on_emit = false;
    for &point in rest {
        accumulated += prev.distance_to(point);
        prev = point;
        ended_on_emit = accumulated >= segment_length;
        if ended_on_emit {
            let _ = out.push(point);
            accumulated = 0.0;
        }
    }

    if !ended_on_emit {
        push_keep_last(&mut out, prev);
    }
    out
}

// Input never exceeds the buffer capacity, so this only guards the final slot.
fn push_keep_last(out: &mut ResampledPath, point: GesturePoint) {
    if let Err(point) = out.push(point) {
        if let Some(last) = out.last_mut() {
            *last = point;
        }
    }
}
