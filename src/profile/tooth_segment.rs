use nalgebra::{Isometry2, Point2};

use crate::misc::{EndPoints, FloatingPoint, Transformable};

use super::{CircularArc, LineSegment};

/// One piece of a tooth outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToothSegment<T: FloatingPoint> {
    Line(LineSegment<T>),
    Arc(CircularArc<T>),
}

impl<T: FloatingPoint> ToothSegment<T> {
    pub fn is_line(&self) -> bool {
        matches!(self, ToothSegment::Line(_))
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, ToothSegment::Arc(_))
    }

    /// Sample the segment; lines yield their two end points,
    /// arcs are split into `arc_segments` chords.
    pub fn tessellate(&self, arc_segments: usize) -> Vec<Point2<T>> {
        match self {
            ToothSegment::Line(line) => vec![*line.start(), *line.end()],
            ToothSegment::Arc(arc) => arc.tessellate(arc_segments),
        }
    }
}

impl<T: FloatingPoint> EndPoints<T> for ToothSegment<T> {
    fn first_point(&self) -> Point2<T> {
        match self {
            ToothSegment::Line(line) => line.first_point(),
            ToothSegment::Arc(arc) => arc.first_point(),
        }
    }

    fn end_point(&self) -> Point2<T> {
        match self {
            ToothSegment::Line(line) => line.end_point(),
            ToothSegment::Arc(arc) => arc.end_point(),
        }
    }
}

impl<T: FloatingPoint> Transformable<&Isometry2<T>> for ToothSegment<T> {
    fn transform(&mut self, transform: &Isometry2<T>) {
        match self {
            ToothSegment::Line(line) => line.transform(transform),
            ToothSegment::Arc(arc) => arc.transform(transform),
        }
    }
}

impl<T: FloatingPoint> From<LineSegment<T>> for ToothSegment<T> {
    fn from(line: LineSegment<T>) -> Self {
        ToothSegment::Line(line)
    }
}

impl<T: FloatingPoint> From<CircularArc<T>> for ToothSegment<T> {
    fn from(arc: CircularArc<T>) -> Self {
        ToothSegment::Arc(arc)
    }
}
