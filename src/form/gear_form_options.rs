use crate::{error::GearError, misc::FloatingPoint};

use super::{AddendumFactorSolverOptions, DedendumClearance};

/// Options for deriving a [`super::GearForm`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearFormOptions<T: FloatingPoint> {
    pub solver: AddendumFactorSolverOptions<T>,
    pub wheel_clearance: DedendumClearance<T>,
    pub pinion_clearance: DedendumClearance<T>,
}

impl<T: FloatingPoint> Default for GearFormOptions<T> {
    fn default() -> Self {
        Self {
            solver: AddendumFactorSolverOptions::default(),
            wheel_clearance: DedendumClearance::default(),
            pinion_clearance: DedendumClearance::default(),
        }
    }
}

impl<T: FloatingPoint> GearFormOptions<T> {
    pub fn with_solver(mut self, solver: AddendumFactorSolverOptions<T>) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_wheel_clearance(mut self, clearance: DedendumClearance<T>) -> Self {
        self.wheel_clearance = clearance;
        self
    }

    pub fn with_pinion_clearance(mut self, clearance: DedendumClearance<T>) -> Self {
        self.pinion_clearance = clearance;
        self
    }

    /// Use the same clearance for both gears
    pub fn with_clearance(self, clearance: DedendumClearance<T>) -> Self {
        self.with_wheel_clearance(clearance)
            .with_pinion_clearance(clearance)
    }

    pub fn solver(&self) -> &AddendumFactorSolverOptions<T> {
        &self.solver
    }

    pub fn wheel_clearance(&self) -> &DedendumClearance<T> {
        &self.wheel_clearance
    }

    pub fn pinion_clearance(&self) -> &DedendumClearance<T> {
        &self.pinion_clearance
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        for (gear, clearance) in [
            ("wheel", &self.wheel_clearance),
            ("pinion", &self.pinion_clearance),
        ] {
            if let DedendumClearance::Slop(slop) = clearance {
                anyhow::ensure!(
                    slop.is_finite() && *slop >= T::zero(),
                    GearError::InvalidGearSpec(format!(
                        "{} slop must not be negative, got {}",
                        gear, slop
                    ))
                );
            }
        }
        Ok(())
    }
}
