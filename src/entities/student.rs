//! Student entity and list filter

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::DEFAULT_PAGE_SIZE;

/// A student record as the API sends and receives it
///
/// The server tolerates absent optional fields, so everything except the
/// identity block defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    /// Nil for a record that has not been saved yet
    pub id: Option<Uuid>,
    pub id_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub permanent_address: String,
    pub phone_number: String,
    pub email: String,
    pub admission_number: Option<String>,
    pub admission_date: String,
    pub roll_number: String,
    pub previous_school: String,
    pub is_scholarship: bool,
    pub citizenship_number: String,
    pub passport_number: String,
    pub national_id: String,
    pub photo_url: String,
    pub signature_url: String,
    pub id_issued_date: String,
    pub id_issued_place: String,
    pub blood_group: String,
    pub medical_notes: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub relation_with_emergency_contact: String,
    pub class_name: String,
    pub class_id: Option<Uuid>,
}

impl Student {
    /// Blank record ready for the add form; the server treats a nil id as
    /// "create".
    pub fn blank() -> Self {
        Self {
            id: Some(Uuid::nil()),
            class_id: Some(Uuid::nil()),
            admission_number: Some("UNSET".to_string()),
            id_issued_date: "0001-01-01T00:00:00Z".to_string(),
            ..Self::default()
        }
    }

    /// Display name assembled from the name parts, skipping empty ones
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Filter + page body for `POST /v1/Students/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFilter {
    pub id_number: String,
    pub admission_number: String,
    pub gender: String,
    pub class_id: Option<Uuid>,
    pub class_name: String,
    pub page_size: u32,
    pub page_number: u32,
}

impl Default for StudentFilter {
    fn default() -> Self {
        Self {
            id_number: String::new(),
            admission_number: String::new(),
            gender: String::new(),
            class_id: None,
            class_name: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}
