//! Line/trace reconciliation
//!
//! When the operator closes a loop, reverses, or explicitly ends the path,
//! the picked line has to be reconciled with the trace accumulated so far:
//! if the line crosses the trace, the trace is to be truncated at the
//! crossing and the line oriented away from it.

use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{Coord, Geometry, LineString, Point};

use crate::bearing::{angle_diff_abs, bearing};
use crate::nearest::nearest_line;
use crate::projection::{Projection, project};
use crate::trace::Trace;

/// Outcome of reconciling a picked line with the existing trace
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reconciliation {
    /// The picked line, oriented so that traversal starts at the point
    /// where it meets the trace
    pub selection: LineString<f64>,
    /// Projection of the reconnection point onto the picked line, for
    /// highlighting
    pub focus: Projection,
    /// When present, the caller must truncate the trace to this length
    /// (keeping indices `0..trace_slice_index`) before appending
    /// `selection`
    pub trace_slice_index: Option<usize>,
}

/// Reconcile a picked line with the trace
///
/// The line nearest to `position` within `geometry` is selected. If it
/// intersects the trace, the trace-side reconnection point and the bearing
/// of approach are moved from the trace's end back to the last crossing,
/// and a truncation index is reported. The selection is then oriented:
/// unchanged when the reconnection sits at the line's start, fully
/// reversed when at its end, and split at the projected point mid-line,
/// walking whichever direction better matches the approach bearing (no
/// angle threshold applies here).
///
/// Returns `None` when the trace has fewer than two positions, when no
/// eligible line exists near `position`, or when projection onto the
/// selected line fails.
pub fn process_next_line(
    position: Point<f64>,
    geometry: &Geometry<f64>,
    trace: &Trace,
) -> Option<Reconciliation> {
    #[cfg(feature = "profiling")]
    profiling::scope!("reconcile::process_next_line");

    if trace.len() < 2 {
        return None;
    }
    let selected = nearest_line(geometry, position)?.line;
    let coords = &selected.0;
    let positions = trace.positions();

    let crossings = crossings(&trace.line_string(), selected);

    let mut point_on_trace = Point::from(positions[positions.len() - 1]);
    let mut last_bearing = bearing(Point::from(positions[positions.len() - 2]), point_on_trace);
    let mut trace_slice_index = None;

    if let Some(&crossing) = crossings.last() {
        // Project the crossing onto the reversed trace so that the match
        // closest to the trace's end is found.
        let reversed: Vec<Coord<f64>> = positions.iter().rev().copied().collect();
        let reversed_line = LineString::new(reversed);
        if let Some(on_reversed) = project(&reversed_line, Point::from(crossing)) {
            // Reversed location zero means the crossing already sits at
            // the trace's end and nothing needs to be cut.
            if on_reversed.location != 0.0 {
                // Map the reversed-trace index back to a forward index.
                // A snapped projection names the reversed vertex itself,
                // which shifts the mapping by one.
                let forward_index = if on_reversed.snapped {
                    positions.len() - on_reversed.index - 1
                } else {
                    positions.len() - on_reversed.index - 2
                };
                point_on_trace = on_reversed.point;
                trace_slice_index = Some(forward_index + 1);
                // The approach bearing comes from the vertex preceding the
                // reconnection point. A reconnection snapped onto the very
                // first position has no predecessor; the bearing
                // degenerates there.
                let previous = if on_reversed.snapped {
                    positions[forward_index.saturating_sub(1)]
                } else {
                    positions[forward_index]
                };
                last_bearing = bearing(Point::from(previous), point_on_trace);
                tracing::debug!(
                    "Trace reconnects at position {}, truncating {} trailing position(s)",
                    forward_index,
                    positions.len() - forward_index - 1
                );
            }
        }
    }

    let nearest = project(selected, point_on_trace)?;
    let count = coords.len();
    let selection = if nearest.location == 0.0 {
        // Reconnection at the line start: traverse as-is.
        selected.clone()
    } else if nearest.index == count - 1 {
        // Reconnection at the line end: traverse reversed.
        let mut reversed = coords.clone();
        reversed.reverse();
        LineString::new(reversed)
    } else {
        // Mid-line: same previous/next comparison as the chooser, but
        // unconditional -- the closer heading always wins.
        let index = nearest.index;
        let previous = if nearest.snapped {
            coords[index - 1]
        } else {
            coords[index]
        };
        let diff_previous =
            angle_diff_abs(last_bearing, bearing(nearest.point, Point::from(previous)));
        let diff_next =
            angle_diff_abs(last_bearing, bearing(nearest.point, Point::from(coords[index + 1])));
        let mut segment = vec![nearest.point.0];
        if diff_previous < diff_next {
            let mut head = coords[..=index].to_vec();
            head.reverse();
            segment.extend(head);
        } else {
            segment.extend_from_slice(&coords[index + 1..]);
        }
        LineString::new(segment)
    };

    Some(Reconciliation {
        selection,
        focus: nearest,
        trace_slice_index,
    })
}

/// All single-point intersections between the trace and the selected line,
/// in trace order
///
/// Exact duplicates are dropped; collinear overlaps contribute no points.
fn crossings(trace: &LineString<f64>, line: &LineString<f64>) -> Vec<Coord<f64>> {
    let mut points: Vec<Coord<f64>> = Vec::new();
    for trace_segment in trace.lines() {
        for line_segment in line.lines() {
            if let Some(LineIntersection::SinglePoint { intersection, .. }) =
                line_intersection(trace_segment, line_segment)
                && !points.contains(&intersection)
            {
                points.push(intersection);
            }
        }
    }
    points
}
