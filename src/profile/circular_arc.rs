use nalgebra::{Isometry2, Point2, Vector2};

use crate::{
    error::GearError,
    misc::{from_count, to_f64_lossy, EndPoints, FloatingPoint, Transformable},
};

/// Center of the arc of radius `radius` running from `start` to `end`.
///
/// Of the two candidate centers, the one on the left of the chord
/// `start → end` is taken, so the arc always turns counter-clockwise.
///
/// # Failures
/// - if the end points coincide
/// - if the radius is smaller than half the chord
///
/// # Example
/// ```
/// use cycloid::prelude::*;
/// use nalgebra::Point2;
/// use approx::assert_relative_eq;
///
/// let center = arc_center(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), 1.0).unwrap();
/// assert_relative_eq!(center, Point2::origin(), epsilon = 1e-12);
/// ```
pub fn arc_center<T: FloatingPoint>(
    start: &Point2<T>,
    end: &Point2<T>,
    radius: T,
) -> anyhow::Result<Point2<T>> {
    let chord = end - start;
    let dist = chord.norm();
    anyhow::ensure!(dist > T::zero(), GearError::DegenerateArc);

    let half_chord = dist * nalgebra::convert::<f64, T>(0.5);
    anyhow::ensure!(
        radius >= half_chord,
        GearError::ArcRadiusTooSmall {
            radius: to_f64_lossy(radius),
            half_chord: to_f64_lossy(half_chord),
        }
    );

    let center_offset = (radius * radius - half_chord * half_chord).sqrt();
    let perp = Vector2::new(-chord.y, chord.x) / dist;
    Ok(nalgebra::center(start, end) + perp * center_offset)
}

/// A counter-clockwise circular arc of a tooth outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularArc<T: FloatingPoint> {
    center: Point2<T>,
    radius: T,
    start: Point2<T>,
    end: Point2<T>,
}

impl<T: FloatingPoint> CircularArc<T> {
    /// Create the arc through two points with a fixed radius, see [`arc_center`]
    pub fn try_from_end_points(
        start: Point2<T>,
        end: Point2<T>,
        radius: T,
    ) -> anyhow::Result<Self> {
        let center = arc_center(&start, &end, radius)?;
        Ok(Self {
            center,
            radius,
            start,
            end,
        })
    }

    pub fn center(&self) -> &Point2<T> {
        &self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn start(&self) -> &Point2<T> {
        &self.start
    }

    pub fn end(&self) -> &Point2<T> {
        &self.end
    }

    fn angle_of(&self, p: &Point2<T>) -> T {
        let v = p - self.center;
        v.y.atan2(v.x)
    }

    pub fn start_angle(&self) -> T {
        self.angle_of(&self.start)
    }

    /// Counter-clockwise angle swept from start to end, in `[0, 2π)`
    pub fn sweep_angle(&self) -> T {
        let sweep = self.angle_of(&self.end) - self.start_angle();
        if sweep < T::zero() {
            sweep + T::two_pi()
        } else {
            sweep
        }
    }

    pub fn length(&self) -> T {
        self.radius * self.sweep_angle()
    }

    /// Point at `fraction` of the sweep, 0 at the start and 1 at the end
    pub fn point_at(&self, fraction: T) -> Point2<T> {
        let angle = self.start_angle() + self.sweep_angle() * fraction;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Sample the arc into `segments` chords (at least one).
    /// The exact end points are kept as first and last samples.
    pub fn tessellate(&self, segments: usize) -> Vec<Point2<T>> {
        let segments = segments.max(1);
        let n = from_count::<T>(segments);
        let mut points = Vec::with_capacity(segments + 1);
        points.push(self.start);
        points.extend((1..segments).map(|i| self.point_at(from_count::<T>(i) / n)));
        points.push(self.end);
        points
    }
}

impl<T: FloatingPoint> EndPoints<T> for CircularArc<T> {
    fn first_point(&self) -> Point2<T> {
        self.start
    }

    fn end_point(&self) -> Point2<T> {
        self.end
    }
}

impl<T: FloatingPoint> Transformable<&Isometry2<T>> for CircularArc<T> {
    fn transform(&mut self, transform: &Isometry2<T>) {
        self.center = transform * self.center;
        self.start = transform * self.start;
        self.end = transform * self.end;
    }
}
