pub mod angles;
pub mod dataset;
pub mod filename;

pub use angles::*;
pub use dataset::*;
pub use filename::*;
