use crate::logic::fetch::{get_course, get_instructor, get_student};
use crate::logic::QueryResult;
use crate::model::{grade_value, LookupKey, RecordId, Student};
use crate::store::{find_by_id, Dataset};
use itertools::Itertools;
use serde::Serialize;
use serde_json::{Number, Value};

const NO_COMPLETED_COURSES: &str = "No completed courses";
const NO_COMPLETED_ENROLLMENTS: &str = "No completed enrollments";

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GpaReport<'a> {
    #[serde(rename_all = "camelCase")]
    NoCompletedCourses {
        student_id: &'a RecordId,
        gpa: Option<String>,
        message: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Computed {
        student_id: &'a RecordId,
        student_name: String,
        /// Two-decimal text, `None` when no graded credits could be counted
        gpa: Option<String>,
    },
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CourseAverageReport<'a> {
    #[serde(rename_all = "camelCase")]
    NoCompletedEnrollments {
        course_id: &'a RecordId,
        average: Option<String>,
        message: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Computed {
        course_id: &'a RecordId,
        course_name: &'a str,
        average_grade: String,
        completed_students: usize,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorStudents<'a> {
    pub instructor_id: &'a RecordId,
    pub instructor_name: String,
    pub students: Vec<&'a Student>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSchedule<'a> {
    pub student_id: &'a RecordId,
    pub student_name: String,
    pub schedule: Vec<ScheduleEntry<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry<'a> {
    pub course: CourseSummary<'a>,
    pub schedule: Option<&'a Value>,
    pub instructor: Option<String>,
    pub enrollment_status: &'a str,
    pub semester: Option<&'a Value>,
}

#[derive(Debug, Serialize)]
pub struct CourseSummary<'a> {
    pub id: &'a RecordId,
    pub code: &'a str,
    pub name: &'a str,
    pub credits: &'a Number,
}

/// Fixed two-decimal rendering of the exact stored value.
///
/// Only values whose binary form ends exactly on a third-decimal 5 are ties;
/// those round away from zero.
pub fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", value + 0.001_f64.copysign(value));
    }
    format!("{:.2}", value)
}

/// Credit-weighted grade point average over the student's graded enrollments.
///
/// Enrollments whose course is missing or whose grade is not in the
/// grade-point table contribute nothing.
pub fn student_gpa<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<GpaReport<'a>> {
    let student = get_student(dataset, raw_id)?;
    let graded = dataset
        .enrollments
        .iter()
        .filter(|e| e.student_id == student.id && e.is_completed())
        .collect::<Vec<_>>();

    if graded.is_empty() {
        return Ok(GpaReport::NoCompletedCourses {
            student_id: &student.id,
            gpa: None,
            message: NO_COMPLETED_COURSES,
        });
    }

    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    for enrollment in graded {
        let course = find_by_id(&dataset.courses, &LookupKey::from_id(&enrollment.course_id));
        let points = enrollment.grade.as_deref().and_then(grade_value);
        if let (Some(course), Some(points)) = (course, points) {
            total_points += points * course.credit_hours();
            total_credits += course.credit_hours();
        }
    }

    let gpa = (total_credits > 0.0).then(|| two_decimals(total_points / total_credits));
    Ok(GpaReport::Computed {
        student_id: &student.id,
        student_name: student.full_name(),
        gpa,
    })
}

/// Mean grade points across the course's graded enrollments.
///
/// Unrecognized grades add nothing to the sum but still count toward the
/// number of completed students that divides it.
pub fn course_average<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<CourseAverageReport<'a>> {
    let course = get_course(dataset, raw_id)?;
    let graded = dataset
        .enrollments
        .iter()
        .filter(|e| e.course_id == course.id && e.is_completed())
        .collect::<Vec<_>>();

    if graded.is_empty() {
        return Ok(CourseAverageReport::NoCompletedEnrollments {
            course_id: &course.id,
            average: None,
            message: NO_COMPLETED_ENROLLMENTS,
        });
    }

    let total_points: f64 = graded
        .iter()
        .filter_map(|e| e.grade.as_deref().and_then(grade_value))
        .sum();
    let completed_students = graded.len();

    Ok(CourseAverageReport::Computed {
        course_id: &course.id,
        course_name: &course.name,
        average_grade: two_decimals(total_points / completed_students as f64),
        completed_students,
    })
}

/// Every distinct student enrolled in any course the instructor teaches,
/// in order of first enrollment.
pub fn instructor_students<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<InstructorStudents<'a>> {
    let instructor = get_instructor(dataset, raw_id)?;
    let course_ids = dataset
        .courses
        .iter()
        .filter(|c| c.instructor_id == instructor.id)
        .map(|c| &c.id)
        .collect::<Vec<_>>();

    let students = dataset
        .enrollments
        .iter()
        .filter(|e| course_ids.contains(&&e.course_id))
        .map(|e| &e.student_id)
        .unique()
        .filter_map(|id| find_by_id(&dataset.students, &LookupKey::from_id(id)))
        .collect();

    Ok(InstructorStudents {
        instructor_id: &instructor.id,
        instructor_name: instructor.full_name(),
        students,
    })
}

/// Current timetable: only enrollments with status `enrolled`.
pub fn student_schedule<'a>(dataset: &'a Dataset, raw_id: &str) -> QueryResult<StudentSchedule<'a>> {
    let student = get_student(dataset, raw_id)?;
    let schedule = dataset
        .enrollments
        .iter()
        .filter(|e| e.student_id == student.id && e.is_enrolled())
        .filter_map(|e| {
            let course = find_by_id(&dataset.courses, &LookupKey::from_id(&e.course_id))?;
            let instructor =
                find_by_id(&dataset.instructors, &LookupKey::from_id(&course.instructor_id));
            Some(ScheduleEntry {
                course: CourseSummary {
                    id: &course.id,
                    code: &course.code,
                    name: &course.name,
                    credits: &course.credits,
                },
                schedule: course.schedule(),
                instructor: instructor.map(|i| i.full_name()),
                enrollment_status: &e.status,
                semester: e.semester(),
            })
        })
        .collect();

    Ok(StudentSchedule {
        student_id: &student.id,
        student_name: student.full_name(),
        schedule,
    })
}
