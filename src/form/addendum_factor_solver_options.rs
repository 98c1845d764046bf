use crate::misc::FloatingPoint;

/// Hyperparameters for the addendum factor fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddendumFactorSolverOptions<T: FloatingPoint> {
    /// The iteration stops once two successive contact angles differ by at most this much.
    pub tolerance: T,
    /// Maximum number of iterations before giving up with a convergence error.
    pub max_iters: u64,
}

impl<T: FloatingPoint> Default for AddendumFactorSolverOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: nalgebra::convert(1e-6),
            max_iters: 10_000,
        }
    }
}

impl<T: FloatingPoint> AddendumFactorSolverOptions<T> {
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }
}
