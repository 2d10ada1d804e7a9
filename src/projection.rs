//! Point-to-line projection
//!
//! This module provides the `project` primitive that maps an arbitrary query
//! point onto a line, reporting the nearest position, the perpendicular
//! distance to it, the along-line distance from the line start, and the
//! vertex index of the containing segment. Everything else in the crate is
//! built on top of it.

use geo::{Distance, Haversine, Line, LineString, Point};

/// Result of projecting a query point onto a line
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    /// Nearest position on the line
    pub point: Point<f64>,
    /// Distance from the query point to `point`, in meters
    pub distance: f64,
    /// Along-line distance from the line start to `point`, in meters
    pub location: f64,
    /// Index of the vertex that begins the segment containing `point`.
    /// When `snapped` is set, the index of the coinciding vertex itself.
    pub index: usize,
    /// Whether `point` is the line vertex at `index` rather than an
    /// interior point of a segment
    pub snapped: bool,
}

/// Project a query point onto a line
///
/// Walks the line's segments once, considering the start vertex, the end
/// vertex, and the perpendicular foot (when it falls within the segment) of
/// each, and keeps the closest candidate. The first candidate seen wins
/// distance ties.
///
/// Returns `None` for degenerate input: a line with fewer than two
/// positions, or coordinates for which a finite distance and location
/// cannot be computed.
pub fn project(line: &LineString<f64>, point: Point<f64>) -> Option<Projection> {
    if line.0.len() < 2 {
        return None;
    }

    let mut best: Option<Projection> = None;
    let mut travelled = 0.0;
    for (index, segment) in line.lines().enumerate() {
        let start = Point::from(segment.start);
        let end = Point::from(segment.end);
        let segment_length = Haversine.distance(start, end);

        consider(
            &mut best,
            Projection {
                point: start,
                distance: Haversine.distance(point, start),
                location: travelled,
                index,
                snapped: true,
            },
        );
        consider(
            &mut best,
            Projection {
                point: end,
                distance: Haversine.distance(point, end),
                location: travelled + segment_length,
                index: index + 1,
                snapped: true,
            },
        );
        if let Some(foot) = perpendicular_foot(&segment, point) {
            consider(
                &mut best,
                Projection {
                    point: foot,
                    distance: Haversine.distance(point, foot),
                    location: travelled + Haversine.distance(start, foot),
                    index,
                    snapped: false,
                },
            );
        }

        travelled += segment_length;
    }
    best
}

/// Keep `candidate` if it is strictly closer than the current best
///
/// Non-finite candidates are dropped, so a projection is only ever built
/// from fully defined quantities.
fn consider(best: &mut Option<Projection>, candidate: Projection) {
    if !(candidate.distance.is_finite() && candidate.location.is_finite()) {
        return;
    }
    if best.is_none_or(|current| candidate.distance < current.distance) {
        *best = Some(candidate);
    }
}

/// Perpendicular foot of `point` on `segment`, or `None` when it falls
/// outside the segment
fn perpendicular_foot(segment: &Line<f64>, point: Point<f64>) -> Option<Point<f64>> {
    let dx = segment.dx();
    let dy = segment.dy();
    let length_squared = dx * dx + dy * dy;
    if length_squared == 0.0 {
        return None;
    }
    let t = ((point.x() - segment.start.x) * dx + (point.y() - segment.start.y) * dy)
        / length_squared;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(Point::new(
        segment.start.x + dx * t,
        segment.start.y + dy * t,
    ))
}
