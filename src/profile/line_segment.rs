use nalgebra::{Isometry2, Point2};

use crate::misc::{EndPoints, FloatingPoint, Transformable};

/// A straight segment of a tooth outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment<T: FloatingPoint> {
    start: Point2<T>,
    end: Point2<T>,
}

impl<T: FloatingPoint> LineSegment<T> {
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Point2<T> {
        &self.start
    }

    pub fn end(&self) -> &Point2<T> {
        &self.end
    }

    pub fn length(&self) -> T {
        (self.end - self.start).norm()
    }
}

impl<T: FloatingPoint> EndPoints<T> for LineSegment<T> {
    fn first_point(&self) -> Point2<T> {
        self.start
    }

    fn end_point(&self) -> Point2<T> {
        self.end
    }
}

impl<T: FloatingPoint> Transformable<&Isometry2<T>> for LineSegment<T> {
    fn transform(&mut self, transform: &Isometry2<T>) {
        self.start = transform * self.start;
        self.end = transform * self.end;
    }
}
