//! Blocking HTTP client for the back-office API
//!
//! One request is in flight at a time; every call either returns a typed
//! payload or an `ApiError` decided here, so screens never inspect raw
//! responses. The bearer token comes from the explicit `Session`, not an
//! ambient global.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::api::types::{DetailEnvelope, ListPage, TokenRequest};
use crate::api::ApiError;
use crate::core::{Config, ImportBackend, ImportSummary, Session};
use crate::entities::{
    ClassFilter, LedgerAccount, LedgerFilter, SchoolClass, Student, StudentFilter, Subject,
    SubjectFilter, Teacher, TeacherFilter,
};

pub struct ApiClient {
    http: Client,
    config: Config,
    token: Option<String>,
}

impl ApiClient {
    /// Client for authenticated calls; fails fast when not signed in so no
    /// request is ever built without a token.
    pub fn new(config: Config, session: &Session) -> Result<Self, ApiError> {
        let token = session.token().map_err(|_| ApiError::NoSession)?.to_string();
        Ok(Self {
            http: Client::new(),
            config,
            token: Some(token),
        })
    }

    /// Client for the token exchange itself.
    pub fn anonymous(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
            token: None,
        }
    }

    // ---------------------------------------------------------------------
    // Auth
    // ---------------------------------------------------------------------

    /// Exchange credentials for a bearer token.
    ///
    /// The server answers a bare JSON string on success and `{msg}` with a
    /// 2xx status on bad credentials; the latter is normalized into a server
    /// rejection here.
    pub fn get_token(&self, user_name: &str, password: &str) -> Result<String, ApiError> {
        let body = TokenRequest {
            service_url: self.config.service_url.clone(),
            user_name: user_name.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.config.url("v1/Auth/getToken"))
            .json(&body)
            .send()?;
        let status = response.status().as_u16();
        let value: Value = Self::ok_or_server_error(response)?.json()?;

        match value {
            Value::String(token) => Ok(token),
            other => {
                let msg = other
                    .get("msg")
                    .and_then(Value::as_str)
                    .unwrap_or("Invalid login credentials")
                    .to_string();
                Err(ApiError::Server { status, body: msg })
            }
        }
    }

    // ---------------------------------------------------------------------
    // Students
    // ---------------------------------------------------------------------

    pub fn list_students(&self, filter: &StudentFilter) -> Result<ListPage<Student>, ApiError> {
        self.post_json("v1/Students/list", filter)
    }

    pub fn student_detail(&self, id: Uuid) -> Result<Student, ApiError> {
        let envelope: DetailEnvelope<Student> =
            self.get_json(&format!("v1/Students/detail/{}", id))?;
        Ok(envelope.data)
    }

    pub fn save_student(&self, student: &Student) -> Result<(), ApiError> {
        self.post_unit("v1/Students/add-update", student)
    }

    // ---------------------------------------------------------------------
    // Teachers
    // ---------------------------------------------------------------------

    pub fn list_teachers(&self, filter: &TeacherFilter) -> Result<ListPage<Teacher>, ApiError> {
        self.post_json("v1/Teacher/list", filter)
    }

    pub fn teacher_detail(&self, id: Uuid) -> Result<Teacher, ApiError> {
        let envelope: DetailEnvelope<Teacher> =
            self.get_json(&format!("v1/Teacher/detail/{}", id))?;
        Ok(envelope.data)
    }

    pub fn save_teacher(&self, teacher: &Teacher) -> Result<(), ApiError> {
        self.post_unit("v1/Teacher/add-update", teacher)
    }

    // ---------------------------------------------------------------------
    // Classes, subjects & ledger accounts
    // ---------------------------------------------------------------------

    pub fn list_classes(&self, filter: &ClassFilter) -> Result<ListPage<SchoolClass>, ApiError> {
        self.post_json("v1/Class/list", filter)
    }

    pub fn list_subjects(&self, filter: &SubjectFilter) -> Result<ListPage<Subject>, ApiError> {
        self.post_json("v1/Subject/list", filter)
    }

    pub fn list_ledger_accounts(
        &self,
        filter: &LedgerFilter,
    ) -> Result<ListPage<LedgerAccount>, ApiError> {
        self.post_json("v1/LedgerAccount/list", filter)
    }

    pub fn save_ledger_account(&self, account: &LedgerAccount) -> Result<(), ApiError> {
        self.post_unit("v1/LedgerAccount/add-update", account)
    }

    // ---------------------------------------------------------------------
    // Bulk data import/export
    // ---------------------------------------------------------------------

    /// Download the template spreadsheet to a local file; returns the number
    /// of bytes written.
    pub fn export_sample(&self, out: &Path) -> Result<u64, ApiError> {
        let response = self.get("v1/Export/export-sample")?;
        let bytes = Self::ok_or_server_error(response)?.bytes()?;
        fs::write(out, &bytes).map_err(|e| ApiError::local_file(out, e))?;
        Ok(bytes.len() as u64)
    }

    fn upload(&self, path: &str, file: &Path) -> Result<Value, ApiError> {
        let form = multipart::Form::new()
            .file("file", file)
            .map_err(|e| ApiError::local_file(file, e))?;
        let response = self
            .authorized(self.http.post(self.config.url(path)))
            .multipart(form)
            .send()?;
        Ok(Self::ok_or_server_error(response)?.json()?)
    }

    // ---------------------------------------------------------------------
    // Plumbing
    // ---------------------------------------------------------------------

    fn authorized(
        &self,
        builder: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> Result<Response, ApiError> {
        Ok(self.authorized(self.http.get(self.config.url(path))).send()?)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.get(path)?;
        Ok(Self::ok_or_server_error(response)?.json()?)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorized(self.http.post(self.config.url(path)))
            .json(body)
            .send()?;
        Ok(Self::ok_or_server_error(response)?.json()?)
    }

    fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.post(self.config.url(path)))
            .json(body)
            .send()?;
        Self::ok_or_server_error(response)?;
        Ok(())
    }

    /// Decide server rejection once, carrying the raw payload.
    fn ok_or_server_error(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            body: if body.is_empty() {
                "(empty response body)".to_string()
            } else {
                body
            },
        })
    }
}

impl ImportBackend for ApiClient {
    fn validate_file(&self, file: &Path) -> Result<String, ApiError> {
        let value = self.upload("v1/Export/validate-excel", file)?;
        // Only the documented `{message}` shape counts as a pass
        match value.get("message").and_then(Value::as_str) {
            Some(message) => Ok(message.to_string()),
            None => Err(ApiError::Shape(
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
            )),
        }
    }

    fn import_file(&self, file: &Path) -> Result<ImportSummary, ApiError> {
        let value = self.upload("v1/Export/import-data", file)?;
        Ok(parse_import_summary(value))
    }

    fn reset_data(&self) -> Result<(), ApiError> {
        let response = self.get("v1/Export/danger-reset-data")?;
        Self::ok_or_server_error(response)?;
        Ok(())
    }
}

/// A non-empty object is a keyed count summary; anything else falls back to
/// a generic success line.
fn parse_import_summary(value: Value) -> ImportSummary {
    match value {
        Value::Object(map) if !map.is_empty() => {
            let counts: BTreeMap<String, String> = map
                .into_iter()
                .map(|(key, val)| (key, scalar_to_string(val)))
                .collect();
            ImportSummary::Counts(counts)
        }
        _ => ImportSummary::Message("Data imported successfully.".to_string()),
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn import_summary_from_counts_object() {
        let summary = parse_import_summary(json!({"students": 120, "teachers": 8}));
        let ImportSummary::Counts(counts) = summary else {
            panic!("expected counts");
        };
        assert_eq!(counts["students"], "120");
        assert_eq!(counts["teachers"], "8");
    }

    #[test]
    fn import_summary_falls_back_on_non_objects() {
        assert_eq!(
            parse_import_summary(json!([])),
            ImportSummary::Message("Data imported successfully.".to_string())
        );
        assert_eq!(
            parse_import_summary(json!({})),
            ImportSummary::Message("Data imported successfully.".to_string())
        );
        assert_eq!(
            parse_import_summary(json!(null)),
            ImportSummary::Message("Data imported successfully.".to_string())
        );
    }

    #[test]
    fn string_counts_render_unquoted() {
        let summary = parse_import_summary(json!({"message": "12 rows imported"}));
        assert_eq!(summary.to_string(), "message: 12 rows imported");
    }
}
