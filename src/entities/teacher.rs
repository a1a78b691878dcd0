//! Teacher entity and list filter

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::DEFAULT_PAGE_SIZE;

/// A teacher record as the API sends and receives it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Teacher {
    pub id: Option<Uuid>,
    pub id_number: String,
    pub full_name: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub hire_date: String,
    /// Assigned class and subject ids; display names come from the class
    /// and subject lookup lists, not from the teacher record itself
    pub class_ids: Vec<Uuid>,
    pub subject_ids: Vec<Uuid>,
}

impl Teacher {
    pub fn blank() -> Self {
        Self {
            id: Some(Uuid::nil()),
            ..Self::default()
        }
    }
}

/// Filter + page body for `POST /v1/Teacher/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherFilter {
    pub id_number: String,
    pub full_name: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub class_ids: Vec<Uuid>,
    pub subject_ids: Vec<Uuid>,
    pub page_size: u32,
    pub page_number: u32,
}

impl Default for TeacherFilter {
    fn default() -> Self {
        Self {
            id_number: String::new(),
            full_name: String::new(),
            gender: String::new(),
            phone_number: String::new(),
            email: String::new(),
            class_ids: Vec::new(),
            subject_ids: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_serializes_empty_id_lists() {
        let json = serde_json::to_value(TeacherFilter::default()).unwrap();
        assert_eq!(json["classIds"], serde_json::json!([]));
        assert_eq!(json["pageSize"], 10);
    }

    #[test]
    fn detail_without_assignments_parses() {
        let teacher: Teacher =
            serde_json::from_str(r#"{"idNumber":"T-9","fullName":"Hari Sharma"}"#).unwrap();
        assert_eq!(teacher.full_name, "Hari Sharma");
        assert!(teacher.class_ids.is_empty());
    }

    #[test]
    fn assignment_ids_round_trip() {
        let id = Uuid::nil();
        let json = format!(r#"{{"fullName":"Hari Sharma","classIds":["{}"],"subjectIds":[]}}"#, id);
        let teacher: Teacher = serde_json::from_str(&json).unwrap();
        assert_eq!(teacher.class_ids, vec![id]);

        let out = serde_json::to_value(&teacher).unwrap();
        assert_eq!(out["classIds"][0], id.to_string());
    }
}
