//! Cycloidal gear pair calculator.
//!
//! [`prelude::GearForm`] derives every dimension of a wheel/pinion pair from
//! the module and the two tooth counts, and [`prelude::ProtoTooth`] turns those
//! dimensions into a single tooth outline (two radial lines and two arcs) that a
//! renderer stamps around the gear center.
//!
//! ```
//! use cycloid::prelude::*;
//!
//! let form = compute_form(0.13, 17, 112).unwrap();
//! assert_eq!(form.gear_ratio(), 6.58824);
//!
//! let wheel = form.wheel_profile(None).unwrap();
//! assert_eq!(wheel.teeth().count(), 112);
//! ```

mod error;
mod form;
mod misc;
mod profile;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::form::*;
    pub use crate::misc::*;
    pub use crate::profile::*;
}
