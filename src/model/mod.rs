pub mod common;
pub mod course;
pub mod enrollment;
pub mod grade_points;
pub mod people;

pub use common::*;
pub use course::*;
pub use enrollment::*;
pub use grade_points::*;
pub use people::*;
