//! The operator's confirmed path
//!
//! A [`Trace`] is an ordered, non-empty sequence of positions owned by the
//! calling workflow. The algorithms in this crate never mutate it; extension
//! and truncation are applied by the caller, the latter driven by the
//! truncation index returned from reconciliation.

use geo::{Coord, LineString, Point};

use crate::bearing::bearing;
use crate::{Result, TraceError};

/// Ordered, non-empty sequence of confirmed positions
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace(Vec<Coord<f64>>);

impl Trace {
    /// Create a trace from confirmed positions
    ///
    /// Returns [`TraceError::EmptyTrace`] when `positions` is empty.
    pub fn new(positions: Vec<Coord<f64>>) -> Result<Self> {
        if positions.is_empty() {
            return Err(TraceError::EmptyTrace);
        }
        Ok(Self(positions))
    }

    /// All confirmed positions, in traversal order
    #[inline]
    pub fn positions(&self) -> &[Coord<f64>] {
        &self.0
    }

    /// Number of confirmed positions
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a trace holds at least one position
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recently confirmed position
    #[inline]
    pub fn last(&self) -> Coord<f64> {
        self.0[self.0.len() - 1]
    }

    /// Append a continuation segment, e.g. the result of
    /// [`choose_next_line`](crate::choose_next_line)
    pub fn extend(&mut self, segment: impl IntoIterator<Item = Coord<f64>>) {
        self.0.extend(segment);
    }

    /// Keep only the positions at indices `0..end`, dropping the rest
    ///
    /// This applies a
    /// [`trace_slice_index`](crate::Reconciliation::trace_slice_index)
    /// before the reconciled selection is appended. `end` must keep at least
    /// one position and may not exceed the current length.
    pub fn truncate_to(&mut self, end: usize) -> Result<()> {
        if end == 0 || end > self.0.len() {
            return Err(TraceError::TruncationOutOfBounds {
                index: end,
                len: self.0.len(),
            });
        }
        self.0.truncate(end);
        Ok(())
    }

    /// Bearing of the last confirmed step, or `None` when fewer than two
    /// positions exist
    pub fn last_bearing(&self) -> Option<f64> {
        self.bearing_into(Point::from(self.last()))
    }

    /// Bearing from the penultimate position into `point`
    ///
    /// This is the heading the operator is currently moving along when
    /// `point` is the next picked position. `None` when the trace has fewer
    /// than two positions.
    pub fn bearing_into(&self, point: Point<f64>) -> Option<f64> {
        if self.0.len() < 2 {
            return None;
        }
        let pivot = self.0[self.0.len() - 2];
        Some(bearing(Point::from(pivot), point))
    }

    /// The trace as a single line through its positions in order
    pub fn line_string(&self) -> LineString<f64> {
        LineString::new(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn northbound() -> Trace {
        Trace::new(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
            coord! { x: 0.0, y: 2.0 },
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Trace::new(vec![]), Err(TraceError::EmptyTrace)));
    }

    #[test]
    fn test_extend_appends() {
        let mut trace = northbound();
        trace.extend(vec![coord! { x: 0.0, y: 3.0 }]);

        assert_eq!(trace.len(), 4);
        assert_eq!(trace.last(), coord! { x: 0.0, y: 3.0 });
    }

    #[test]
    fn test_truncate_to() {
        let mut trace = northbound();
        trace.truncate_to(2).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last(), coord! { x: 0.0, y: 1.0 });

        assert!(trace.truncate_to(0).is_err());
        assert!(trace.truncate_to(3).is_err());
        trace.truncate_to(2).unwrap();
    }

    #[test]
    fn test_last_bearing() {
        let trace = northbound();
        assert_eq!(trace.last_bearing(), Some(0.0));

        let single = Trace::new(vec![coord! { x: 0.0, y: 0.0 }]).unwrap();
        assert_eq!(single.last_bearing(), None);
    }

    #[test]
    fn test_bearing_into() {
        let trace = northbound();
        let east = trace.bearing_into(Point::new(1.0, 1.0)).unwrap();
        // Heading from the penultimate position (0, 1), east along the
        // great circle (slightly north of 90 away from the equator).
        assert!((east - 90.0).abs() < 0.05);
    }
}
