//! Failures raised while deriving a gear form or building tooth geometry

/// All the errors the form solver and the profile builder can report.
/// They are wrapped into `anyhow::Error` by the public API; use
/// `downcast_ref::<GearError>()` to match on them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GearError {
    /// Module or tooth counts outside their valid range
    #[error("invalid gear spec: {0}")]
    InvalidGearSpec(String),
    /// The addendum factor iteration stopped before the step fell below tolerance
    #[error("addendum factor iteration did not converge after {iterations} iterations (last step {delta:e})")]
    NumericConvergence { iterations: u64, delta: f64 },
    /// An arc cannot span a chord longer than its diameter
    #[error("arc radius {radius} is smaller than half the chord length {half_chord}")]
    ArcRadiusTooSmall { radius: f64, half_chord: f64 },
    /// Both arc end points coincide, so the chord has no direction
    #[error("arc end points coincide")]
    DegenerateArc,
}
