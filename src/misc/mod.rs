pub mod end_points;
pub mod floating_point;
pub mod line_string_helper;
pub mod transformable;

pub use end_points::*;
pub use floating_point::*;
pub use line_string_helper::*;
pub use transformable::*;
