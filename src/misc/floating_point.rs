use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Number of decimals every published gear dimension is rounded to
pub const FORM_DECIMALS: i32 = 5;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

/// Round half-up to the given number of decimals.
/// # Example
/// ```
/// use cycloid::prelude::*;
///
/// assert_eq!(round_decimals(6.588235294117647_f64, 5), 6.58824);
/// assert_eq!(round_decimals(14.560000000000002_f64, 5), 14.56);
/// ```
pub fn round_decimals<T: FloatingPoint>(value: T, decimals: i32) -> T {
    let scale: T = nalgebra::convert(10_f64.powi(decimals));
    (value * scale + nalgebra::convert::<f64, T>(0.5)).floor() / scale
}

/// Round to [`FORM_DECIMALS`] decimals.
pub fn round5<T: FloatingPoint>(value: T) -> T {
    round_decimals(value, FORM_DECIMALS)
}

/// Convert a tooth count (or any index) into the scalar type.
pub fn from_count<T: FloatingPoint>(count: usize) -> T {
    nalgebra::convert(count as f64)
}

/// Lossy conversion used for error reports and geo interop.
pub fn to_f64_lossy<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

pub fn degrees_to_radians<T: FloatingPoint>(degrees: T) -> T {
    degrees * T::pi() / nalgebra::convert::<f64, T>(180.)
}
