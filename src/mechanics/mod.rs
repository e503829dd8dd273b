pub mod curve;
pub mod partition;
pub mod stats;

pub use curve::*;
pub use partition::*;
pub use stats::*;
