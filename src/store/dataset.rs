use crate::model::{Assignment, Course, Enrollment, Grade, Instructor, Student};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the dataset document at startup
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable snapshot of all six collections, in document order.
///
/// Built once at startup and shared read-only with every handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub assignments: Vec<Assignment>,
    pub grades: Vec<Grade>,
}

impl Dataset {
    /// Read and parse the dataset document. Every collection is required.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&contents).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Loaded dataset from {}: {} students, {} instructors, {} courses, {} enrollments, {} assignments, {} grades",
            path.display(),
            dataset.students.len(),
            dataset.instructors.len(),
            dataset.courses.len(),
            dataset.enrollments.len(),
            dataset.assignments.len(),
            dataset.grades.len()
        );

        Ok(dataset)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
