use nalgebra::{Isometry2, Point2};

use crate::{
    error::GearError,
    form::GearForm,
    misc::{degrees_to_radians, to_line_string_helper, FloatingPoint, Transformable},
};

use super::{replicate, ProtoTooth, ToothReplication};

/// Rendering parameters that are not derived from the gear form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearProfileOptions<T: FloatingPoint> {
    /// Axial depth of the extruded gear body
    pub thickness: T,
}

impl<T: FloatingPoint> Default for GearProfileOptions<T> {
    fn default() -> Self {
        Self {
            thickness: nalgebra::convert(0.55),
        }
    }
}

impl<T: FloatingPoint> GearProfileOptions<T> {
    pub fn with_thickness(mut self, thickness: T) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn thickness(&self) -> T {
        self.thickness
    }
}

/// Everything a renderer needs to draw one gear of the pair:
/// the tooth to stamp, how many times, the root circle, and where the gear sits.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearProfile<T: FloatingPoint> {
    /// tooth in the gear's local frame, centered at the origin
    proto_tooth: ProtoTooth<T>,
    tooth_count: usize,
    /// radius of the dedendum circle
    root_radius: T,
    outer_radius: T,
    /// local frame → pair frame
    placement: Isometry2<T>,
    thickness: T,
}

impl<T: FloatingPoint> GearProfile<T> {
    /// # Failures
    /// - if the thickness is not positive
    /// - if the root radius is not positive, as happens for very small tooth counts
    /// - if the tooth cannot be built from the given dimensions
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        pitch_diameter: T,
        addendum: T,
        half_tooth_angle: T,
        tooth_count: usize,
        root_radius: T,
        outer_radius: T,
        placement: Isometry2<T>,
        options: Option<GearProfileOptions<T>>,
    ) -> anyhow::Result<Self> {
        let options = options.unwrap_or_default();
        anyhow::ensure!(
            options.thickness().is_finite() && options.thickness() > T::zero(),
            GearError::InvalidGearSpec(format!(
                "thickness must be positive, got {}",
                options.thickness()
            ))
        );
        anyhow::ensure!(
            root_radius.is_finite() && root_radius > T::zero(),
            GearError::InvalidGearSpec(format!(
                "root radius must be positive, got {}",
                root_radius
            ))
        );
        let proto_tooth = ProtoTooth::try_new(pitch_diameter, addendum, half_tooth_angle)?;
        Ok(Self {
            proto_tooth,
            tooth_count,
            root_radius,
            outer_radius,
            placement,
            thickness: options.thickness(),
        })
    }

    pub fn proto_tooth(&self) -> &ProtoTooth<T> {
        &self.proto_tooth
    }

    pub fn tooth_count(&self) -> usize {
        self.tooth_count
    }

    pub fn root_radius(&self) -> T {
        self.root_radius
    }

    pub fn outer_radius(&self) -> T {
        self.outer_radius
    }

    pub fn placement(&self) -> &Isometry2<T> {
        &self.placement
    }

    /// Gear center in the pair frame
    pub fn center(&self) -> Point2<T> {
        self.placement * Point2::origin()
    }

    pub fn thickness(&self) -> T {
        self.thickness
    }

    pub fn angular_step(&self) -> T {
        self.teeth().angular_step()
    }

    /// Teeth in the gear's local frame
    pub fn teeth(&self) -> ToothReplication<'_, T> {
        replicate(&self.proto_tooth, self.tooth_count)
    }

    /// Teeth moved into the pair frame; the angle is still the local rotation step
    pub fn placed_teeth(&self) -> impl Iterator<Item = (ProtoTooth<T>, T)> + '_ {
        self.teeth()
            .map(move |(tooth, angle)| (tooth.transformed(&self.placement), angle))
    }

    /// Tessellated outlines of every placed tooth
    pub fn outline_line_strings(&self, arc_segments: usize) -> Vec<geo::LineString> {
        self.placed_teeth()
            .map(|(tooth, _)| to_line_string_helper(&tooth.tessellate(arc_segments)))
            .collect()
    }
}

impl<T: FloatingPoint> GearForm<T> {
    /// Profile of the wheel, centered at the origin
    /// # Example
    /// ```
    /// use cycloid::prelude::*;
    ///
    /// let form = compute_form(0.13, 17, 112).unwrap();
    /// let wheel = form.wheel_profile(None).unwrap();
    /// assert_eq!(wheel.root_radius(), 7.19875);
    /// assert_eq!(wheel.thickness(), 0.55);
    /// ```
    pub fn wheel_profile(
        &self,
        options: Option<GearProfileOptions<T>>,
    ) -> anyhow::Result<GearProfile<T>> {
        let wheel = self.wheel();
        GearProfile::try_new(
            wheel.pitch_diameter(),
            wheel.addendum(),
            wheel.half_tooth_angle(),
            wheel.tooth_count(),
            wheel.inner_radius(),
            wheel.outer_radius(),
            Isometry2::identity(),
            options,
        )
    }

    /// Profile of the pinion, moved to its center and turned by its angular offset
    /// so that its leaves fall between the wheel teeth
    pub fn pinion_profile(
        &self,
        options: Option<GearProfileOptions<T>>,
    ) -> anyhow::Result<GearProfile<T>> {
        let pinion = self.pinion();
        let placement = Isometry2::new(
            pinion.center().coords,
            degrees_to_radians(pinion.angular_offset_degrees()),
        );
        GearProfile::try_new(
            pinion.pitch_diameter(),
            pinion.addendum(),
            pinion.half_tooth_angle(),
            pinion.tooth_count(),
            pinion.inner_radius(),
            pinion.outer_radius(),
            placement,
            options,
        )
    }
}
