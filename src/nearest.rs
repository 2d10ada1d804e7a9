//! Nearest-line selection over line and multi-line geometries

use geo::{Geometry, LineString, Point};

use crate::projection::{Projection, project};

/// A constituent line matched by [`nearest_line`], paired with the
/// projection of the query point onto it
#[derive(Clone, Debug)]
pub struct NearestLine<'a> {
    /// The matched line, borrowed from the queried geometry
    pub line: &'a LineString<f64>,
    /// Projection of the query point onto `line`
    pub projection: Projection,
}

/// Find the constituent line of `geometry` nearest to `point`
///
/// For a `LineString` the geometry itself is matched; for a
/// `MultiLineString` every constituent line with at least two positions is
/// projected onto and the one with the smallest distance wins, earlier
/// lines winning ties. Other geometry variants, lines too short to project
/// onto, and geometries with no eligible constituent yield `None`.
pub fn nearest_line<'a>(
    geometry: &'a Geometry<f64>,
    point: Point<f64>,
) -> Option<NearestLine<'a>> {
    match geometry {
        Geometry::LineString(line) => {
            let projection = project(line, point)?;
            Some(NearestLine { line, projection })
        }
        Geometry::MultiLineString(lines) => {
            let mut best: Option<NearestLine<'a>> = None;
            for line in &lines.0 {
                let Some(projection) = project(line, point) else {
                    continue;
                };
                if best
                    .as_ref()
                    .is_none_or(|current| projection.distance < current.projection.distance)
                {
                    best = Some(NearestLine { line, projection });
                }
            }
            best
        }
        _ => None,
    }
}
