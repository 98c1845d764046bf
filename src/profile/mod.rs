pub mod circular_arc;
pub mod gear_profile;
pub mod line_segment;
pub mod proto_tooth;
pub mod tooth_replication;
pub mod tooth_segment;

pub use circular_arc::*;
pub use gear_profile::*;
pub use line_segment::*;
pub use proto_tooth::*;
pub use tooth_replication::*;
pub use tooth_segment::*;
