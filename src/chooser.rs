//! Next-line selection
//!
//! Given the point the operator just picked, the trace so far and the
//! candidate features near the point, pick the single line that best
//! continues the current direction of travel, fix its traversal
//! orientation, and return the positions extending the trace.

use geo::{Coord, Geometry, Point};

use crate::bearing::{angle_diff_abs, bearing};
use crate::nearest::{NearestLine, nearest_line};
use crate::trace::Trace;

/// Choose the line that best continues the trace through `point`
///
/// Every candidate feature is projected onto; the projection decides
/// whether the line can only be walked forward (query at its start),
/// only backward (query at its end), or either way (mid-line, where the
/// closer of the two local headings to the trace's current bearing fixes
/// the orientation). Candidates deviating from the current bearing by more
/// than `angle_threshold` degrees are rejected; among the rest the smallest
/// deviation wins, first seen winning ties.
///
/// Returns the positions to append to the trace, starting at `point`, or
/// an empty sequence when no candidate is admissible. A trace with fewer
/// than two positions has no bearing to continue and also yields an empty
/// sequence.
pub fn choose_next_line(
    point: Point<f64>,
    trace: &Trace,
    features: &[Geometry<f64>],
    angle_threshold: f64,
) -> Vec<Coord<f64>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("chooser::choose_next_line");

    let Some(last_bearing) = trace.bearing_into(point) else {
        tracing::warn!(
            "Trace has {} position(s), current bearing is undefined",
            trace.len()
        );
        return Vec::new();
    };

    let mut best_diff = f64::INFINITY;
    let mut best: Option<(NearestLine<'_>, bool)> = None;
    for feature in features {
        let Some(nearest) = nearest_line(feature, point) else {
            continue;
        };
        let Some((forward, diff)) = continuation(point, last_bearing, &nearest) else {
            continue;
        };
        if diff > angle_threshold {
            continue;
        }
        if diff < best_diff {
            best_diff = diff;
            best = Some((nearest, forward));
        }
    }

    let Some((winner, forward)) = best else {
        tracing::debug!(
            "No admissible continuation among {} feature(s)",
            features.len()
        );
        return Vec::new();
    };

    let coords = &winner.line.0;
    let index = winner.projection.index;
    let mut segment: Vec<Coord<f64>> = if forward {
        coords[index + 1..].to_vec()
    } else {
        let mut head = coords[..=index].to_vec();
        head.reverse();
        head
    };
    if segment.first() != Some(&point.0) {
        segment.insert(0, point.0);
    }
    segment
}

/// Traversal orientation and bearing deviation for one candidate
///
/// Returns `(forward, deviation)`, or `None` when the candidate's local
/// heading cannot be formed.
fn continuation(
    point: Point<f64>,
    last_bearing: f64,
    nearest: &NearestLine<'_>,
) -> Option<(bool, f64)> {
    let coords = &nearest.line.0;
    let count = coords.len();
    let index = nearest.projection.index;

    if nearest.projection.location == 0.0 {
        // At the line start only forward traversal is meaningful.
        let heading = bearing(Point::from(coords[0]), Point::from(coords[1]));
        return Some((true, angle_diff_abs(last_bearing, heading)));
    }
    if index == count - 1 {
        // At the line end only backward traversal is meaningful.
        let heading = bearing(Point::from(coords[count - 1]), Point::from(coords[count - 2]));
        return Some((false, angle_diff_abs(last_bearing, heading)));
    }

    // Mid-line: compare the headings toward the previous and the next
    // vertex. A projection snapped onto the vertex at `index` would make
    // the backward heading zero-length, so step one vertex further back.
    let previous = if nearest.projection.snapped {
        coords[index.checked_sub(1)?]
    } else {
        coords[index]
    };
    let diff_previous = angle_diff_abs(last_bearing, bearing(point, Point::from(previous)));
    let diff_next = angle_diff_abs(last_bearing, bearing(point, Point::from(coords[index + 1])));
    if diff_previous < diff_next {
        Some((false, diff_previous))
    } else {
        Some((true, diff_next))
    }
}
