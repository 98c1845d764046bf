use nalgebra::{Isometry2, Point2, Vector2};

use crate::{
    error::GearError,
    misc::{
        dedup_points, is_closed_chain, to_line_string_helper, EndPoints, FloatingPoint,
        Transformable,
    },
};

use super::{replicate, CircularArc, LineSegment, ToothReplication, ToothSegment};

/// Outline of a single tooth, anchored on the x axis of its gear.
///
/// The outline runs `center → left flank → apex → right flank → center`:
/// a radial line, two arcs of the tip radius meeting at the apex, and a radial line back.
/// The flank points sit on the pitch circle at `∓ half_tooth_angle`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtoTooth<T: FloatingPoint> {
    /// gear center the outline is anchored to
    center: Point2<T>,
    segments: [ToothSegment<T>; 4],
}

fn polar<T: FloatingPoint>(radius: T, angle: T) -> Point2<T> {
    Point2::new(angle.cos() * radius, angle.sin() * radius)
}

impl<T: FloatingPoint> ProtoTooth<T> {
    /// Build the tooth of a gear centered at the origin
    /// # Failures
    /// - if the pitch diameter is not positive or an input is not finite
    /// - if a tip arc cannot reach between its flank point and the apex
    ///
    /// # Example
    /// ```
    /// use cycloid::prelude::*;
    ///
    /// let tooth = ProtoTooth::try_new(14.56, 0.25218, 0.01402).unwrap();
    /// assert_eq!(tooth.apex().x, 7.28 + 0.25218);
    /// assert!(tooth.is_closed(1e-9));
    /// ```
    pub fn try_new(pitch_diameter: T, addendum: T, half_tooth_angle: T) -> anyhow::Result<Self> {
        anyhow::ensure!(
            pitch_diameter.is_finite() && pitch_diameter > T::zero(),
            GearError::InvalidGearSpec(format!(
                "pitch diameter must be positive, got {}",
                pitch_diameter
            ))
        );
        anyhow::ensure!(
            addendum.is_finite() && half_tooth_angle.is_finite(),
            GearError::InvalidGearSpec(format!(
                "addendum ({}) and half tooth angle ({}) must be finite",
                addendum, half_tooth_angle
            ))
        );

        let pitch_radius = pitch_diameter * nalgebra::convert::<f64, T>(0.5);
        let outer_radius = pitch_radius + addendum;
        let center = Point2::origin();
        let apex = polar(outer_radius, T::zero());
        let left = polar(pitch_radius, -half_tooth_angle);
        let right = polar(pitch_radius, half_tooth_angle);

        let segments = [
            LineSegment::new(center, left).into(),
            CircularArc::try_from_end_points(left, apex, outer_radius)?.into(),
            CircularArc::try_from_end_points(apex, right, outer_radius)?.into(),
            LineSegment::new(right, center).into(),
        ];

        #[cfg(feature = "log")]
        log::trace!(
            "proto tooth: pitch radius {}, tip radius {}, half angle {}",
            pitch_radius,
            outer_radius,
            half_tooth_angle
        );

        Ok(Self { center, segments })
    }

    /// Line, arc, arc, line
    pub fn segments(&self) -> &[ToothSegment<T>; 4] {
        &self.segments
    }

    pub fn center(&self) -> &Point2<T> {
        &self.center
    }

    /// Pitch circle point on the leading flank
    pub fn left_flank(&self) -> Point2<T> {
        self.segments[0].end_point()
    }

    /// Tip of the tooth, where both arcs meet
    pub fn apex(&self) -> Point2<T> {
        self.segments[1].end_point()
    }

    /// Pitch circle point on the trailing flank
    pub fn right_flank(&self) -> Point2<T> {
        self.segments[2].end_point()
    }

    /// Angle of the tooth axis around its gear center
    pub fn axis_angle(&self) -> T {
        let axis: Vector2<T> = self.apex() - self.center;
        axis.y.atan2(axis.x)
    }

    /// Every segment starts where the previous one ends, and the last one ends at the first start.
    pub fn is_closed(&self, tolerance: T) -> bool {
        is_closed_chain(&self.segments, tolerance)
    }

    /// Closed polyline of the outline (first point repeated at the end),
    /// with each arc split into `arc_segments` chords.
    pub fn tessellate(&self, arc_segments: usize) -> Vec<Point2<T>> {
        let points = self
            .segments
            .iter()
            .flat_map(|segment| segment.tessellate(arc_segments))
            .collect();
        dedup_points(points, T::default_epsilon())
    }

    /// Tessellated outline as a `geo::LineString`
    pub fn to_line_string(&self, arc_segments: usize) -> geo::LineString {
        to_line_string_helper(&self.tessellate(arc_segments))
    }

    /// The `tooth_count` copies of this tooth spaced evenly around its center
    pub fn replicate(&self, tooth_count: usize) -> ToothReplication<'_, T> {
        replicate(self, tooth_count)
    }
}

impl<T: FloatingPoint> Transformable<&Isometry2<T>> for ProtoTooth<T> {
    fn transform(&mut self, transform: &Isometry2<T>) {
        self.center = transform * self.center;
        self.segments
            .iter_mut()
            .for_each(|segment| segment.transform(transform));
    }
}
