use std::fmt;
use thiserror::Error;

/// The collection an id failed to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Instructor,
    Course,
    Enrollment,
    Assignment,
    Grade,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Student => "Student",
            EntityKind::Instructor => "Instructor",
            EntityKind::Course => "Course",
            EntityKind::Enrollment => "Enrollment",
            EntityKind::Assignment => "Assignment",
            EntityKind::Grade => "Grade",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{0} not found")]
    NotFound(EntityKind),
}

pub type QueryResult<T> = Result<T, QueryError>;
