use crate::logic::{EntityKind, QueryError, QueryResult};
use crate::model::{
    Assignment, Course, Enrollment, Grade, Instructor, LookupKey, Record, Student,
};
use crate::store::{find_by_id, Dataset};

/// Resolve a request id in `records`, or fail with `kind`'s not-found error.
pub fn require<'a, R: Record>(records: &'a [R], raw_id: &str, kind: EntityKind) -> QueryResult<&'a R> {
    find_by_id(records, &LookupKey::parse(raw_id)).ok_or_else(|| {
        log::debug!("{} lookup missed for id {:?}", kind, raw_id);
        QueryError::NotFound(kind)
    })
}

pub fn get_student<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<&'a Student> {
    require(&dataset.students, raw_id, EntityKind::Student)
}

pub fn get_instructor<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<&'a Instructor> {
    require(&dataset.instructors, raw_id, EntityKind::Instructor)
}

pub fn get_course<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<&'a Course> {
    require(&dataset.courses, raw_id, EntityKind::Course)
}

pub fn get_enrollment<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<&'a Enrollment> {
    require(&dataset.enrollments, raw_id, EntityKind::Enrollment)
}

pub fn get_assignment<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<&'a Assignment> {
    require(&dataset.assignments, raw_id, EntityKind::Assignment)
}

pub fn get_grade<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<&'a Grade> {
    require(&dataset.grades, raw_id, EntityKind::Grade)
}
