//! Subject entity (lookup-only; backs teacher assignment display and filters)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub id: Option<Uuid>,
    pub name: String,
}

/// Page body for `POST /v1/Subject/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectFilter {
    pub page_size: u32,
    pub page_number: u32,
}

impl Default for SubjectFilter {
    fn default() -> Self {
        Self::lookup()
    }
}

impl SubjectFilter {
    /// Wide page; subjects are only ever fetched as a full reference list
    pub fn lookup() -> Self {
        Self {
            page_size: crate::entities::LOOKUP_PAGE_SIZE,
            page_number: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_requests_a_full_page() {
        let json = serde_json::to_value(SubjectFilter::lookup()).unwrap();
        assert_eq!(json["pageSize"], 100);
        assert_eq!(json["pageNumber"], 1);
    }
}
