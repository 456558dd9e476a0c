use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub credits: Number,
    pub instructor_id: RecordId,
    /// Remaining attributes, `schedule` among them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    pub fn credit_hours(&self) -> f64 {
        self.credits.as_f64().unwrap_or(0.0)
    }

    /// Meeting times, passed through untouched.
    pub fn schedule(&self) -> Option<&Value> {
        self.extra.get("schedule")
    }
}

impl Record for Course {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: RecordId,
    pub course_id: RecordId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Assignment {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
