use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status of an enrollment that counts toward the current schedule.
pub const STATUS_ENROLLED: &str = "enrolled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: RecordId,
    pub student_id: RecordId,
    pub course_id: RecordId,
    pub status: String,
    /// Letter grade; `None` until the course is completed
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.grade.is_some()
    }

    pub fn is_enrolled(&self) -> bool {
        self.status == STATUS_ENROLLED
    }

    pub fn semester(&self) -> Option<&Value> {
        self.extra.get("semester")
    }
}

impl Record for Enrollment {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// A single graded piece of work recorded against an enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: RecordId,
    pub enrollment_id: RecordId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Grade {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enrollment_grade_null_or_absent() {
        let graded: Enrollment = serde_json::from_value(json!({
            "id": 1, "studentId": 1, "courseId": 2, "status": "completed",
            "grade": "B+", "semester": "Fall 2024"
        }))
        .unwrap();
        assert!(graded.is_completed());
        assert_eq!(graded.semester(), Some(&json!("Fall 2024")));

        let null_grade: Enrollment = serde_json::from_value(json!({
            "id": 2, "studentId": 1, "courseId": 3, "status": "enrolled", "grade": null
        }))
        .unwrap();
        assert!(!null_grade.is_completed());
        assert!(null_grade.is_enrolled());

        let absent_grade: Enrollment = serde_json::from_value(json!({
            "id": 3, "studentId": 1, "courseId": 4, "status": "dropped"
        }))
        .unwrap();
        assert!(!absent_grade.is_completed());
        assert!(!absent_grade.is_enrolled());
    }

    #[test]
    fn test_extra_attributes_survive_serialization() {
        let source = json!({
            "id": 5, "enrollmentId": 1, "assignmentId": 9, "score": 88, "feedback": "Good"
        });
        let grade: Grade = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(grade.extra.get("score"), Some(&json!(88)));
        assert_eq!(serde_json::to_value(&grade).unwrap(), source);
    }
}
