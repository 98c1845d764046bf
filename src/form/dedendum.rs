use crate::misc::{round5, FloatingPoint};

/// How deep the root circle of a gear is cut below its pitch circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DedendumClearance<T: FloatingPoint> {
    /// Mating addendum plus the given slop (must not be negative)
    Slop(T),
    /// Table dedendum that ignores the mating gear:
    /// `module·π/2` for the wheel, `module·(flank factor + 0.4)` for the pinion
    Nominal,
}

impl<T: FloatingPoint> Default for DedendumClearance<T> {
    fn default() -> Self {
        DedendumClearance::Slop(T::zero())
    }
}

/// Root gap of a gear together with its root and tip radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dedendum<T: FloatingPoint> {
    /// depth of the root circle below the pitch circle
    pub gap: T,
    pub inner_radius: T,
    pub outer_radius: T,
}

impl<T: FloatingPoint> Dedendum<T> {
    fn new(gap: T, pitch_diameter: T, addendum: T) -> Self {
        let pitch_radius = pitch_diameter * nalgebra::convert::<f64, T>(0.5);
        Self {
            gap: round5(gap),
            inner_radius: round5(pitch_radius - gap),
            outer_radius: round5(pitch_radius + addendum),
        }
    }
}

/// Wheel root, leaving room for the pinion leaf tips.
pub fn wheel_dedendum<T: FloatingPoint>(
    clearance: &DedendumClearance<T>,
    module: T,
    pitch_diameter: T,
    addendum: T,
    pinion_addendum: T,
) -> Dedendum<T> {
    let gap = match clearance {
        DedendumClearance::Slop(slop) => pinion_addendum + *slop,
        DedendumClearance::Nominal => module * T::frac_pi_2(),
    };
    Dedendum::new(gap, pitch_diameter, addendum)
}

/// Pinion root, leaving room for the wheel tooth tips.
pub fn pinion_dedendum<T: FloatingPoint>(
    clearance: &DedendumClearance<T>,
    module: T,
    flank_factor: T,
    pitch_diameter: T,
    addendum: T,
    wheel_addendum: T,
) -> Dedendum<T> {
    let gap = match clearance {
        DedendumClearance::Slop(slop) => wheel_addendum + *slop,
        DedendumClearance::Nominal => module * (flank_factor + nalgebra::convert::<f64, T>(0.4)),
    };
    Dedendum::new(gap, pitch_diameter, addendum)
}
