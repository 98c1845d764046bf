use std::iter::FusedIterator;

use nalgebra::{Isometry2, UnitComplex};

use crate::misc::{from_count, FloatingPoint, Transformable};

use super::ProtoTooth;

/// Lazy sequence of the teeth of a gear: the proto tooth itself, then
/// `tooth_count - 1` copies rotated about the gear center by `i · 2π / tooth_count`.
///
/// Each item is the rotated outline together with its rotation angle.
/// Nothing is cached, so a clone taken before iterating replays the whole sequence.
#[derive(Debug, Clone)]
pub struct ToothReplication<'a, T: FloatingPoint> {
    proto: &'a ProtoTooth<T>,
    tooth_count: usize,
    index: usize,
}

/// Spread `tooth_count` copies of `proto` evenly around its center.
/// # Example
/// ```
/// use cycloid::prelude::*;
/// use approx::assert_relative_eq;
///
/// let tooth = ProtoTooth::try_new(10.0, 1.0, 0.1).unwrap();
/// let teeth: Vec<_> = replicate(&tooth, 4).collect();
/// assert_eq!(teeth.len(), 4);
/// assert_relative_eq!(teeth[1].1, std::f64::consts::FRAC_PI_2);
/// assert_relative_eq!(teeth[1].0.apex().y, 6.0, epsilon = 1e-12);
/// ```
pub fn replicate<T: FloatingPoint>(
    proto: &ProtoTooth<T>,
    tooth_count: usize,
) -> ToothReplication<'_, T> {
    ToothReplication {
        proto,
        tooth_count,
        index: 0,
    }
}

impl<T: FloatingPoint> ToothReplication<'_, T> {
    pub fn tooth_count(&self) -> usize {
        self.tooth_count
    }

    /// Angle between two neighbouring teeth, zero for a toothless gear
    pub fn angular_step(&self) -> T {
        if self.tooth_count == 0 {
            T::zero()
        } else {
            T::two_pi() / from_count::<T>(self.tooth_count)
        }
    }

    fn angle_at(&self, index: usize) -> T {
        T::two_pi() * from_count::<T>(index) / from_count::<T>(self.tooth_count)
    }
}

impl<T: FloatingPoint> Iterator for ToothReplication<'_, T> {
    type Item = (ProtoTooth<T>, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.tooth_count {
            return None;
        }
        let index = self.index;
        self.index += 1;

        if index == 0 {
            return Some((self.proto.clone(), T::zero()));
        }

        let angle = self.angle_at(index);
        // rotate about the tooth's own gear center, not the frame origin
        let rotation = Isometry2::rotation_wrt_point(UnitComplex::new(angle), *self.proto.center());
        Some((self.proto.transformed(&rotation), angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tooth_count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: FloatingPoint> ExactSizeIterator for ToothReplication<'_, T> {}

impl<T: FloatingPoint> FusedIterator for ToothReplication<'_, T> {}
