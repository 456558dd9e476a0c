use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    /// Any other attributes present in the source document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Instructor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Student {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Instructor {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
