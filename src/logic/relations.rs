use crate::logic::fetch::{get_course, get_enrollment, get_instructor, get_student};
use crate::logic::QueryResult;
use crate::model::{Assignment, Course, Enrollment, Grade, LookupKey, Student};
use crate::store::{find_by_id, Dataset};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A record joined with the enrollment that links it.
///
/// Serializes as the record's attributes with `enrollmentStatus` and `grade`
/// taken from the enrollment; an attribute of the same name on the record is
/// replaced where it stands.
#[derive(Debug)]
pub struct Enrolled<'a, R> {
    pub record: &'a R,
    pub enrollment: &'a Enrollment,
}

pub type EnrolledCourse<'a> = Enrolled<'a, Course>;
pub type EnrolledStudent<'a> = Enrolled<'a, Student>;

impl<R: Serialize> Serialize for Enrolled<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut attributes = match serde_json::to_value(self.record).map_err(S::Error::custom)? {
            Value::Object(map) => map,
            _ => return Err(S::Error::custom("joined record is not an object")),
        };
        attributes.insert(
            "enrollmentStatus".to_string(),
            Value::String(self.enrollment.status.clone()),
        );
        attributes.insert(
            "grade".to_string(),
            self.enrollment.grade.clone().map_or(Value::Null, Value::String),
        );
        attributes.serialize(serializer)
    }
}

pub fn student_enrollments<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<Vec<&'a Enrollment>> {
    let student = get_student(dataset, raw_id)?;
    Ok(dataset
        .enrollments
        .iter()
        .filter(|e| e.student_id == student.id)
        .collect())
}

pub fn student_courses<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<Vec<EnrolledCourse<'a>>> {
    let student = get_student(dataset, raw_id)?;
    Ok(dataset
        .enrollments
        .iter()
        .filter(|e| e.student_id == student.id)
        .filter_map(|e| {
            let course = find_by_id(&dataset.courses, &LookupKey::from_id(&e.course_id))?;
            Some(Enrolled {
                record: course,
                enrollment: e,
            })
        })
        .collect())
}

pub fn course_students<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<Vec<EnrolledStudent<'a>>> {
    let course = get_course(dataset, raw_id)?;
    Ok(dataset
        .enrollments
        .iter()
        .filter(|e| e.course_id == course.id)
        .filter_map(|e| {
            let student = find_by_id(&dataset.students, &LookupKey::from_id(&e.student_id))?;
            Some(Enrolled {
                record: student,
                enrollment: e,
            })
        })
        .collect())
}

pub fn instructor_courses<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<Vec<&'a Course>> {
    let instructor = get_instructor(dataset, raw_id)?;
    Ok(dataset
        .courses
        .iter()
        .filter(|c| c.instructor_id == instructor.id)
        .collect())
}

pub fn course_assignments<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<Vec<&'a Assignment>> {
    let course = get_course(dataset, raw_id)?;
    Ok(dataset
        .assignments
        .iter()
        .filter(|a| a.course_id == course.id)
        .collect())
}

pub fn enrollment_grades<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<Vec<&'a Grade>> {
    let enrollment = get_enrollment(dataset, raw_id)?;
    Ok(dataset
        .grades
        .iter()
        .filter(|g| g.enrollment_id == enrollment.id)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::fixtures::campus;
    use crate::logic::{EntityKind, QueryError};
    use crate::model::{Record, RecordId};
    use serde_json::json;

    fn ids<T: Record>(records: &[&T]) -> Vec<RecordId> {
        records.iter().map(|r| r.id().clone()).collect()
    }

    #[test]
    fn test_student_enrollments() {
        let dataset = campus();
        let enrollments = student_enrollments(&dataset, "1").unwrap();
        assert_eq!(
            ids(&enrollments),
            vec![1, 2, 3, 4, 9, 12].into_iter().map(RecordId::Numeric).collect::<Vec<_>>()
        );

        assert_eq!(student_enrollments(&dataset, "4").unwrap().len(), 1);
        assert_eq!(
            student_enrollments(&dataset, "77").unwrap_err(),
            QueryError::NotFound(EntityKind::Student)
        );
    }

    #[test]
    fn test_student_courses_drops_unresolved_courses() {
        let dataset = campus();
        let courses = student_courses(&dataset, "1").unwrap();

        // Enrollments 4 and 12 point at courses that do not exist
        let codes: Vec<&str> = courses.iter().map(|c| c.record.code.as_str()).collect();
        assert_eq!(codes, vec!["CS101", "CS201", "MATH150", "HIST100"]);
        assert_eq!(courses[0].enrollment.grade.as_deref(), Some("A"));
        assert_eq!(courses[2].enrollment.status, "enrolled");
        assert_eq!(courses[2].enrollment.grade, None);
    }

    #[test]
    fn test_student_courses_serialized_shape() {
        let dataset = campus();
        let courses = student_courses(&dataset, "2").unwrap();
        let value = serde_json::to_value(&courses[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "code": "CS101",
                "name": "Intro to Programming",
                "credits": 4,
                "instructorId": 1,
                "schedule": { "days": ["Mon", "Wed"], "time": "09:00-10:30" },
                "enrollmentStatus": "completed",
                "grade": "B"
            })
        );
    }

    #[test]
    fn test_enrollment_fields_replace_record_attributes() {
        let mut dataset = campus();
        dataset.students[0].extra.insert("grade".to_string(), json!(10));

        let students = course_students(&dataset, "1").unwrap();
        let serialized = serde_json::to_string(&students[0]).unwrap();
        assert_eq!(
            serialized,
            r#"{"id":1,"firstName":"Alice","lastName":"Smith","email":"alice@campus.edu","grade":"A","enrollmentStatus":"completed"}"#
        );
    }

    #[test]
    fn test_course_students() {
        let dataset = campus();
        let students = course_students(&dataset, "1").unwrap();
        let names: Vec<&str> = students.iter().map(|s| s.record.first_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara", "Dan"]);
        assert_eq!(students[3].enrollment.grade.as_deref(), Some("X"));

        // Enrollment 11 references a student that does not exist
        let students = course_students(&dataset, "2").unwrap();
        let names: Vec<&str> = students.iter().map(|s| s.record.first_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(students[1].enrollment.status, "dropped");

        assert_eq!(
            course_students(&dataset, "9").unwrap_err(),
            QueryError::NotFound(EntityKind::Course)
        );
    }

    #[test]
    fn test_instructor_courses() {
        let dataset = campus();
        let courses = instructor_courses(&dataset, "1").unwrap();
        assert_eq!(ids(&courses), vec![RecordId::Numeric(1), RecordId::Numeric(2)]);
        assert!(instructor_courses(&dataset, "3").unwrap().is_empty());
        assert_eq!(
            instructor_courses(&dataset, "99").unwrap_err(),
            QueryError::NotFound(EntityKind::Instructor)
        );
    }

    #[test]
    fn test_course_assignments() {
        let dataset = campus();
        let assignments = course_assignments(&dataset, "1").unwrap();
        assert_eq!(ids(&assignments), vec![RecordId::Numeric(1), RecordId::Numeric(2)]);
        assert!(course_assignments(&dataset, "2").unwrap().is_empty());
    }

    #[test]
    fn test_enrollment_grades() {
        let dataset = campus();
        let grades = enrollment_grades(&dataset, "1").unwrap();
        assert_eq!(ids(&grades), vec![RecordId::Numeric(1), RecordId::Numeric(2)]);
        assert!(enrollment_grades(&dataset, "2").unwrap().is_empty());
        assert_eq!(
            enrollment_grades(&dataset, "500").unwrap_err(),
            QueryError::NotFound(EntityKind::Enrollment)
        );
    }
}
