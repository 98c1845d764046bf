use argmin::{
    core::{ArgminFloat, Error, Operator},
    float,
};

/// Contact angle map of the cycloidal flank, iterated to its fixed point.
///
/// With `r2 = 2·nw/np`, one step maps the contact angle `t` to
/// `π/np + r2·atan2(sin t, 1 + r2 − cos t)`.
#[derive(Debug, Clone, Copy)]
pub struct AddendumFactorProblem<F> {
    /// pinion tooth count
    pinion_teeth: F,
    /// twice the gear ratio
    ratio: F,
}

impl<F: ArgminFloat> AddendumFactorProblem<F> {
    pub fn new(pinion_teeth: F, wheel_teeth: F) -> Self {
        Self {
            pinion_teeth,
            ratio: float!(2.0) * wheel_teeth / pinion_teeth,
        }
    }

    /// Generating circle angle `b` for a contact angle `t`
    pub fn flank_angle(&self, t: F) -> F {
        t.sin().atan2(F::one() + self.ratio - t.cos())
    }

    /// Addendum factor at the converged contact angle `t`
    pub fn addendum_factor(&self, t: F) -> F {
        let k = F::one() + self.ratio;
        let d = (F::one() + k * k - float!(2.0) * k * t.cos()).sqrt();
        float!(0.25) * self.pinion_teeth * (F::one() - k + d)
    }
}

impl<F: ArgminFloat> Operator for AddendumFactorProblem<F> {
    type Param = F;
    type Output = F;

    fn apply(&self, t: &Self::Param) -> Result<Self::Output, Error> {
        Ok(F::PI() / self.pinion_teeth + self.ratio * self.flank_angle(*t))
    }
}
