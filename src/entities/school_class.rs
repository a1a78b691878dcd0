//! Class entity (list-only in the back office)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolClass {
    pub id: Option<Uuid>,
    pub name: String,
}

/// Page body for `POST /v1/Class/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFilter {
    pub page_size: u32,
    pub page_number: u32,
}

impl Default for ClassFilter {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

impl ClassFilter {
    /// Wide page used when classes back a picker rather than a table
    pub fn lookup() -> Self {
        Self {
            page_size: crate::entities::LOOKUP_PAGE_SIZE,
            page_number: 1,
        }
    }
}
