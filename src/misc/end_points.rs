use nalgebra::Point2;

use super::FloatingPoint;

/// Planar entity with a start and an end, such as an outline segment.
pub trait EndPoints<T: FloatingPoint> {
    fn first_point(&self) -> Point2<T>;
    fn end_point(&self) -> Point2<T>;
    fn end_points(&self) -> (Point2<T>, Point2<T>) {
        (self.first_point(), self.end_point())
    }
}

/// Check that every entity ends where the next one starts, and the last one
/// returns to the first start point.
pub fn is_closed_chain<T: FloatingPoint, E: EndPoints<T>>(entities: &[E], tolerance: T) -> bool {
    let (Some(first), Some(last)) = (entities.first(), entities.last()) else {
        return false;
    };
    let connected = entities
        .windows(2)
        .all(|pair| (pair[1].first_point() - pair[0].end_point()).norm() <= tolerance);
    connected && (first.first_point() - last.end_point()).norm() <= tolerance
}
