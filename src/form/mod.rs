pub mod addendum_factor;
pub mod addendum_factor_problem;
pub mod addendum_factor_solver_options;
pub mod dedendum;
pub mod fixed_point_iteration;
pub mod gear_form;
pub mod gear_form_options;
pub mod gear_spec;
pub mod pinion_addendum;

pub use addendum_factor::*;
pub use addendum_factor_problem::*;
pub use addendum_factor_solver_options::*;
pub use dedendum::*;
pub use fixed_point_iteration::*;
pub use gear_form::*;
pub use gear_form_options::*;
pub use gear_spec::*;
pub use pinion_addendum::*;

#[cfg(test)]
mod tests;
