pub mod aggregates;
pub mod error;
pub mod fetch;
pub mod relations;

pub use aggregates::*;
pub use error::*;
pub use fetch::*;
pub use relations::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::store::Dataset;

    pub const CAMPUS_JSON: &str = include_str!("../../tests/fixtures/campus.json");

    pub fn campus() -> Dataset {
        Dataset::from_json_str(CAMPUS_JSON).expect("fixture dataset parses")
    }
}
