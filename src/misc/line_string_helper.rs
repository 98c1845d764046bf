use itertools::Itertools;
use nalgebra::Point2;

use crate::misc::{to_f64_lossy, FloatingPoint};

/// Convert a points into geo::LineString
pub fn to_line_string_helper<T: FloatingPoint>(points: &[Point2<T>]) -> geo::LineString {
    geo::LineString::new(
        points
            .iter()
            .map(|p| geo::Coord::from([to_f64_lossy(p.x), to_f64_lossy(p.y)]))
            .collect_vec(),
    )
}

/// Drop consecutive points closer than `tolerance`, keeping the first of each run.
pub fn dedup_points<T: FloatingPoint>(points: Vec<Point2<T>>, tolerance: T) -> Vec<Point2<T>> {
    points
        .into_iter()
        .coalesce(|a, b| {
            if (b - a).norm() <= tolerance {
                Ok(a)
            } else {
                Err((a, b))
            }
        })
        .collect()
}
