use std::fmt::Display;

use argmin::core::ArgminFloat;
use nalgebra::Point2;

use crate::misc::{from_count, round5, FloatingPoint};

use super::{
    pinion_addendum, pinion_dedendum, solve_addendum_factor, wheel_dedendum, Dedendum,
    GearFormOptions, GearSpec, LeafProfile,
};

/// Dimensions of the wheel, the larger gear of the pair, centered at the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelForm<T: FloatingPoint> {
    pitch_diameter: T,
    tooth_count: usize,
    addendum: T,
    addendum_radius: T,
    /// half of the angle a tooth occupies on the pitch circle (radians)
    half_tooth_angle: T,
    /// depth of the root circle below the pitch circle
    dedendum: T,
    inner_radius: T,
    outer_radius: T,
}

impl<T: FloatingPoint> WheelForm<T> {
    pub fn pitch_diameter(&self) -> T {
        self.pitch_diameter
    }

    pub fn pitch_radius(&self) -> T {
        self.pitch_diameter * nalgebra::convert::<f64, T>(0.5)
    }

    pub fn tooth_count(&self) -> usize {
        self.tooth_count
    }

    pub fn addendum(&self) -> T {
        self.addendum
    }

    pub fn addendum_radius(&self) -> T {
        self.addendum_radius
    }

    pub fn half_tooth_angle(&self) -> T {
        self.half_tooth_angle
    }

    pub fn dedendum(&self) -> T {
        self.dedendum
    }

    pub fn inner_radius(&self) -> T {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> T {
        self.outer_radius
    }
}

/// Dimensions of the pinion, placed beside the wheel on the positive x axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinionForm<T: FloatingPoint> {
    pitch_diameter: T,
    tooth_count: usize,
    leaf_profile: LeafProfile,
    addendum: T,
    addendum_radius: T,
    half_tooth_angle: T,
    dedendum: T,
    inner_radius: T,
    outer_radius: T,
    /// rotation that makes the pinion leaves mesh with the wheel teeth (degrees)
    angular_offset_degrees: T,
    center: Point2<T>,
}

impl<T: FloatingPoint> PinionForm<T> {
    pub fn pitch_diameter(&self) -> T {
        self.pitch_diameter
    }

    pub fn pitch_radius(&self) -> T {
        self.pitch_diameter * nalgebra::convert::<f64, T>(0.5)
    }

    pub fn tooth_count(&self) -> usize {
        self.tooth_count
    }

    pub fn leaf_profile(&self) -> LeafProfile {
        self.leaf_profile
    }

    pub fn addendum(&self) -> T {
        self.addendum
    }

    pub fn addendum_radius(&self) -> T {
        self.addendum_radius
    }

    pub fn half_tooth_angle(&self) -> T {
        self.half_tooth_angle
    }

    pub fn dedendum(&self) -> T {
        self.dedendum
    }

    pub fn inner_radius(&self) -> T {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> T {
        self.outer_radius
    }

    pub fn angular_offset_degrees(&self) -> T {
        self.angular_offset_degrees
    }

    pub fn center(&self) -> &Point2<T> {
        &self.center
    }
}

/// Every dimension of a cycloidal wheel/pinion pair.
/// All values except the raw `addendum_factor` are rounded to five decimals when the form is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearForm<T: FloatingPoint> {
    spec: GearSpec<T>,
    /// addendum factor straight out of the solver, unrounded
    addendum_factor: T,
    /// `0.95 · addendum_factor`, the flank factor of the pinion
    flank_factor: T,
    gear_ratio: T,
    circular_pitch: T,
    /// `module · π / 2`
    dedendum: T,
    center_distance: T,
    wheel: WheelForm<T>,
    pinion: PinionForm<T>,
}

/// Pitch circle and tip of one gear, before its root is known.
struct ToothTip<T> {
    pitch_diameter: T,
    addendum: T,
    addendum_radius: T,
    half_tooth_angle: T,
}

fn wheel_tip<T: FloatingPoint>(spec: &GearSpec<T>, addendum_factor: T) -> ToothTip<T> {
    let m = spec.module();
    let nw = from_count::<T>(spec.wheel_teeth());
    ToothTip {
        pitch_diameter: round5(m * nw),
        addendum: round5(m * nalgebra::convert::<f64, T>(0.95) * addendum_factor),
        addendum_radius: round5(m * nalgebra::convert::<f64, T>(1.40) * addendum_factor),
        half_tooth_angle: round5(T::pi() / nw / nalgebra::convert::<f64, T>(2.0)),
    }
}

fn pinion_tip<T: FloatingPoint>(spec: &GearSpec<T>) -> ToothTip<T> {
    let m = spec.module();
    let pitch_diameter = m * from_count::<T>(spec.pinion_teeth());
    let width = if spec.pinion_teeth() <= 10 { 1.05 } else { 1.25 };
    let addendum = pinion_addendum(spec.pinion_teeth(), m);
    ToothTip {
        pitch_diameter: round5(pitch_diameter),
        addendum: round5(addendum.addendum()),
        addendum_radius: round5(addendum.addendum_radius()),
        half_tooth_angle: round5(nalgebra::convert::<f64, T>(width) * m / pitch_diameter),
    }
}

impl<T: FloatingPoint> GearForm<T> {
    /// Derive the form of a gear pair
    /// # Failures
    /// - if a clearance slop in the options is negative
    /// - if the addendum factor iteration does not converge
    ///
    /// # Example
    /// ```
    /// use cycloid::prelude::*;
    ///
    /// let spec = GearSpec::try_new(0.13, 17, 112).unwrap();
    /// let form = GearForm::try_new(&spec, None).unwrap();
    /// assert_eq!(form.circular_pitch(), 0.40841);
    /// assert_eq!(form.wheel().pitch_diameter(), 14.56);
    /// assert_eq!(form.pinion().pitch_diameter(), 2.21);
    /// ```
    pub fn try_new(spec: &GearSpec<T>, options: Option<GearFormOptions<T>>) -> anyhow::Result<Self>
    where
        T: ArgminFloat,
    {
        let options = options.unwrap_or_default();
        options.validate()?;

        let addendum_factor = solve_addendum_factor(
            spec.pinion_teeth(),
            spec.wheel_teeth(),
            Some(*options.solver()),
        )?;
        let form = Self::from_addendum_factor(spec, addendum_factor, &options);

        #[cfg(feature = "log")]
        log::debug!(
            "gear form m = {}, {}/{} teeth: ratio {}, center distance {}",
            spec.module(),
            spec.pinion_teeth(),
            spec.wheel_teeth(),
            form.gear_ratio,
            form.center_distance
        );

        Ok(form)
    }

    /// Assemble the form once the addendum factor is known.
    fn from_addendum_factor(
        spec: &GearSpec<T>,
        addendum_factor: T,
        options: &GearFormOptions<T>,
    ) -> Self {
        let m = spec.module();
        let np = spec.pinion_teeth();
        let nw = spec.wheel_teeth();
        let half = nalgebra::convert::<f64, T>(0.5);

        let flank_factor = round5(nalgebra::convert::<f64, T>(0.95) * addendum_factor);
        let wheel_tip = wheel_tip(spec, addendum_factor);
        let pinion_tip = pinion_tip(spec);

        let wheel_root: Dedendum<T> = wheel_dedendum(
            options.wheel_clearance(),
            m,
            wheel_tip.pitch_diameter,
            wheel_tip.addendum,
            pinion_tip.addendum,
        );
        let pinion_root: Dedendum<T> = pinion_dedendum(
            options.pinion_clearance(),
            m,
            flank_factor,
            pinion_tip.pitch_diameter,
            pinion_tip.addendum,
            wheel_tip.addendum,
        );

        let center_distance =
            round5((m * from_count::<T>(nw) + m * from_count::<T>(np)) * half);
        let half_turn = nalgebra::convert::<f64, T>(180.);

        Self {
            spec: *spec,
            addendum_factor,
            flank_factor,
            gear_ratio: round5(from_count::<T>(nw) / from_count::<T>(np)),
            circular_pitch: round5(m * T::pi()),
            dedendum: round5(m * T::frac_pi_2()),
            center_distance,
            wheel: WheelForm {
                pitch_diameter: wheel_tip.pitch_diameter,
                tooth_count: nw,
                addendum: wheel_tip.addendum,
                addendum_radius: wheel_tip.addendum_radius,
                half_tooth_angle: wheel_tip.half_tooth_angle,
                dedendum: wheel_root.gap,
                inner_radius: wheel_root.inner_radius,
                outer_radius: wheel_root.outer_radius,
            },
            pinion: PinionForm {
                pitch_diameter: pinion_tip.pitch_diameter,
                tooth_count: np,
                leaf_profile: LeafProfile::from_tooth_count(np),
                addendum: pinion_tip.addendum,
                addendum_radius: pinion_tip.addendum_radius,
                half_tooth_angle: pinion_tip.half_tooth_angle,
                dedendum: pinion_root.gap,
                inner_radius: pinion_root.inner_radius,
                outer_radius: pinion_root.outer_radius,
                angular_offset_degrees: round5(half_turn + half_turn / from_count::<T>(np)),
                center: Point2::new(center_distance, T::zero()),
            },
        }
    }

    pub fn spec(&self) -> &GearSpec<T> {
        &self.spec
    }

    pub fn module(&self) -> T {
        self.spec.module()
    }

    pub fn addendum_factor(&self) -> T {
        self.addendum_factor
    }

    pub fn flank_factor(&self) -> T {
        self.flank_factor
    }

    pub fn gear_ratio(&self) -> T {
        self.gear_ratio
    }

    pub fn circular_pitch(&self) -> T {
        self.circular_pitch
    }

    pub fn dedendum(&self) -> T {
        self.dedendum
    }

    /// Distance between the wheel and pinion centers
    pub fn center_distance(&self) -> T {
        self.center_distance
    }

    pub fn wheel(&self) -> &WheelForm<T> {
        &self.wheel
    }

    pub fn pinion(&self) -> &PinionForm<T> {
        &self.pinion
    }
}

/// Validate a spec and derive its form with default options.
/// # Example
/// ```
/// use cycloid::prelude::*;
///
/// let form = compute_form(0.13, 17, 112).unwrap();
/// assert_eq!(form.pinion().center().x, 8.385);
/// ```
pub fn compute_form<T, N>(module: T, pinion_teeth: N, wheel_teeth: N) -> anyhow::Result<GearForm<T>>
where
    T: FloatingPoint + ArgminFloat,
    N: TryInto<usize> + Copy + Display,
{
    let spec = GearSpec::try_new(module, pinion_teeth, wheel_teeth)?;
    GearForm::try_new(&spec, None)
}
