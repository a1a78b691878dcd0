//! Response envelopes shared across endpoints
//!
//! List endpoints answer `{data: [...], totalPages?}` and detail endpoints
//! `{data: {...}}`. The page total is optional on the wire and stays optional
//! here: the client never reconstructs a total from the current page's item
//! count, so screens either show an authoritative total or none.

use serde::{Deserialize, Serialize};

/// One page of a list endpoint's results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_pages: None,
        }
    }
}

impl<T> ListPage<T> {
    /// Footer text for a table: "Page 2 of 7", or just "Page 2" when the
    /// server sent no total.
    pub fn page_label(&self, page_number: u32) -> String {
        match self.total_pages {
            Some(total) => format!("Page {} of {}", page_number, total),
            None => format!("Page {}", page_number),
        }
    }
}

/// Wrapper around a single record
#[derive(Debug, Clone, Deserialize)]
pub struct DetailEnvelope<T> {
    pub data: T,
}

/// Body for `POST /v1/Auth/getToken`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub service_url: String,
    pub user_name: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SchoolClass;

    #[test]
    fn list_page_parses_with_and_without_total() {
        let page: ListPage<SchoolClass> =
            serde_json::from_str(r#"{"data":[{"name":"Grade 1"}],"totalPages":3}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.page_label(2), "Page 2 of 3");

        let bare: ListPage<SchoolClass> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(bare.total_pages, None);
        assert_eq!(bare.page_label(1), "Page 1");
    }

    #[test]
    fn token_request_matches_wire_names() {
        let body = TokenRequest {
            service_url: "erp.test".to_string(),
            user_name: "admin".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["serviceUrl"], "erp.test");
        assert_eq!(json["userName"], "admin");
    }
}
