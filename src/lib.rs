//! Track Tracer - Path Continuation for Manual Line-Network Tracing
//!
//! This library decides, one operator action at a time, how a traced path
//! through a network of line geometries should continue: which of the
//! candidate lines near a picked point carries the path onward, in which
//! orientation to walk it, and how a picked line reconciles with a trace
//! that may loop back onto itself.
//!
//! # Architecture
//!
//! - **[`project`]**: nearest-point projection of a query point onto a line
//! - **[`bearing`] / [`angle_diff`]**: compass bearing math over degrees
//! - **[`nearest_line`]**: closest constituent line of a geometry
//! - **[`choose_next_line`]**: the greedy next-step decision engine
//! - **[`process_next_line`]**: loop-closure and reversal reconciliation
//! - **[`Trace`]**: the caller-owned, append-only confirmed path
//!
//! Every operation is a pure, synchronous function of its inputs; nothing
//! is cached or retained between calls. Absence of a usable result is an
//! `Option::None` or an empty sequence, never a panic. The candidate
//! feature set is supplied per call by the caller's own spatial query.
//!
//! Coordinates are (longitude, latitude) degrees by the WGS84 convention
//! and are not validated. Distances and along-line locations are haversine
//! meters; bearings are degrees from north, increasing clockwise.

mod bearing;
mod chooser;
mod nearest;
mod projection;
mod reconcile;
mod trace;

// Public API exports
pub use bearing::{angle_diff, angle_diff_abs, bearing};
pub use chooser::choose_next_line;
pub use nearest::{NearestLine, nearest_line};
pub use projection::{Projection, project};
pub use reconcile::{Reconciliation, process_next_line};
pub use trace::Trace;

/// Error types for trace ownership operations
///
/// The tracing algorithms themselves never fail; these cover misuse of the
/// caller-owned [`Trace`] value.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("a trace requires at least one position")]
    EmptyTrace,

    #[error("truncation to {index} out of bounds for a trace of {len} position(s)")]
    TruncationOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TraceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, coord, line_string, point};

    /// One full operator round-trip: pick a point, extend the trace,
    /// then close the loop and reconcile.
    #[test]
    fn test_extend_then_reconcile() {
        let mut trace =
            Trace::new(vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 0.0, y: 1.0 }]).unwrap();

        let features = [Geometry::LineString(
            line_string![(x: 0.0, y: 1.0), (x: 0.0, y: 2.0), (x: 1.0, y: 2.0)],
        )];
        let segment = choose_next_line(point!(x: 0.0, y: 1.0), &trace, &features, 45.0);
        assert!(!segment.is_empty());
        trace.extend(segment);
        assert_eq!(trace.last(), coord! { x: 1.0, y: 2.0 });

        // A line cutting back across the first leg closes a loop.
        let pick = Geometry::LineString(line_string![(x: 0.5, y: 1.0), (x: -0.5, y: 0.0)]);
        let outcome = process_next_line(point!(x: 0.4, y: 0.9), &pick, &trace).unwrap();
        assert!(outcome.trace_slice_index.is_none() || outcome.trace_slice_index.unwrap() <= trace.len());
        if let Some(end) = outcome.trace_slice_index {
            trace.truncate_to(end).unwrap();
        }
        trace.extend(outcome.selection.0.iter().copied());
        assert!(trace.len() >= 2);
    }
}
