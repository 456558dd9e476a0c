pub mod dataset;
pub mod lookup;

pub use dataset::*;
pub use lookup::*;
