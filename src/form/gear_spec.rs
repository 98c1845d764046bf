use std::fmt::Display;

use crate::{error::GearError, misc::FloatingPoint};

/// Input of the form calculator: the module shared by both gears and their tooth counts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GearSpec<T: FloatingPoint> {
    module: T,
    pinion_teeth: usize,
    wheel_teeth: usize,
}

impl<T: FloatingPoint> GearSpec<T> {
    /// Create a validated gear spec
    /// # Failures
    /// - if the module is not a positive finite number
    /// - if a tooth count is below 1 (negative counts included)
    /// - if the wheel has fewer teeth than the pinion
    ///
    /// # Example
    /// ```
    /// use cycloid::prelude::*;
    ///
    /// let spec = GearSpec::try_new(0.13, 17, 112).unwrap();
    /// assert_eq!(spec.pinion_teeth(), 17);
    ///
    /// let err = GearSpec::<f64>::try_new(0.13, 17, -1).unwrap_err();
    /// assert!(matches!(
    ///     err.downcast_ref::<GearError>(),
    ///     Some(GearError::InvalidGearSpec(_))
    /// ));
    /// ```
    pub fn try_new<N>(module: T, pinion_teeth: N, wheel_teeth: N) -> anyhow::Result<Self>
    where
        N: TryInto<usize> + Copy + Display,
    {
        anyhow::ensure!(
            module.is_finite() && module > T::zero(),
            GearError::InvalidGearSpec(format!("module must be positive, got {}", module))
        );
        let pinion_teeth = tooth_count(pinion_teeth, "pinion")?;
        let wheel_teeth = tooth_count(wheel_teeth, "wheel")?;
        anyhow::ensure!(
            wheel_teeth >= pinion_teeth,
            GearError::InvalidGearSpec(format!(
                "wheel must have at least as many teeth as the pinion, got {} < {}",
                wheel_teeth, pinion_teeth
            ))
        );
        Ok(Self {
            module,
            pinion_teeth,
            wheel_teeth,
        })
    }

    pub fn module(&self) -> T {
        self.module
    }

    pub fn pinion_teeth(&self) -> usize {
        self.pinion_teeth
    }

    pub fn wheel_teeth(&self) -> usize {
        self.wheel_teeth
    }
}

/// Deserialized specs go through [`GearSpec::try_new`], so they are validated like constructed ones.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for GearSpec<T>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(rename = "GearSpec")]
        struct RawGearSpec<F> {
            module: F,
            pinion_teeth: usize,
            wheel_teeth: usize,
        }

        let raw = RawGearSpec::<T>::deserialize(deserializer)?;
        Self::try_new(raw.module, raw.pinion_teeth, raw.wheel_teeth)
            .map_err(serde::de::Error::custom)
    }
}

fn tooth_count<N>(count: N, gear: &str) -> anyhow::Result<usize>
where
    N: TryInto<usize> + Copy + Display,
{
    match count.try_into() {
        Ok(n) if n >= 1 => Ok(n),
        _ => anyhow::bail!(GearError::InvalidGearSpec(format!(
            "{} tooth count must be at least 1, got {}",
            gear, count
        ))),
    }
}
