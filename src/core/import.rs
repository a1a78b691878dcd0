//! Bulk spreadsheet import workflow
//!
//! The server performs the authoritative parsing of an uploaded spreadsheet;
//! the client only enforces ordering: a file must be validated by the server
//! before it may be imported, and selecting a new file (even one with the
//! same name) discards any prior validation, because the server has only ever
//! examined file contents, never a handle. The session lives in process
//! memory for one `data upload` run; nothing is persisted.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::api::ApiError;

/// Where the workflow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportState {
    #[default]
    Idle,
    Validated,
    Imported,
}

impl fmt::Display for ImportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportState::Idle => write!(f, "idle"),
            ImportState::Validated => write!(f, "validated"),
            ImportState::Imported => write!(f, "imported"),
        }
    }
}

/// Errors surfaced by the workflow; precondition failures never reach the
/// network.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Please choose a file to validate.")]
    NoFileSelected,

    #[error("Please validate before importing.")]
    NotValidated,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Server-side result of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSummary {
    /// Flat keyed counts, e.g. `students: 120`
    Counts(BTreeMap<String, String>),
    /// A plain server (or fallback) message
    Message(String),
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportSummary::Counts(counts) => {
                let mut first = true;
                for (key, value) in counts {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{}: {}", key, value)?;
                    first = false;
                }
                Ok(())
            }
            ImportSummary::Message(msg) => write!(f, "{}", msg),
        }
    }
}

/// The transport the workflow drives; `ApiClient` is the production
/// implementation, tests use a fake.
pub trait ImportBackend {
    /// Send a file to the validation endpoint; returns the server message.
    fn validate_file(&self, file: &Path) -> Result<String, ApiError>;

    /// Send a validated file to the import endpoint.
    fn import_file(&self, file: &Path) -> Result<ImportSummary, ApiError>;

    /// Destructive: ask the server to drop all imported data.
    fn reset_data(&self) -> Result<(), ApiError>;
}

/// One visit's worth of import workflow state
#[derive(Debug, Default)]
pub struct ImportSession {
    state: ImportState,
    selected_file: Option<PathBuf>,
    validated_file: Option<PathBuf>,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn validated_file(&self) -> Option<&Path> {
        self.validated_file.as_deref()
    }

    /// Select a file to work on. Always drops back to `Idle` and clears any
    /// previously validated file: the server has not seen this one.
    pub fn select_file(&mut self, file: PathBuf) {
        self.selected_file = Some(file);
        self.validated_file = None;
        self.state = ImportState::Idle;
    }

    /// Send the selected file for server-side validation.
    ///
    /// On success the file moves from selected to validated and the state
    /// becomes `Validated`. On any failure nothing changes; the same file
    /// stays selected and may be re-submitted.
    pub fn validate<B: ImportBackend>(&mut self, backend: &B) -> Result<String, ImportError> {
        let file = self.selected_file.as_ref().ok_or(ImportError::NoFileSelected)?;
        let message = backend.validate_file(file)?;

        self.validated_file = self.selected_file.take();
        self.state = ImportState::Validated;
        Ok(message)
    }

    /// Import the validated file.
    ///
    /// Requires a prior successful validation of the same file. A failed
    /// import leaves the state untouched so it may be retried; a successful
    /// one moves to `Imported` but keeps the validated file, so a repeat
    /// import issues a fresh call against the same file.
    pub fn import<B: ImportBackend>(&mut self, backend: &B) -> Result<ImportSummary, ImportError> {
        let file = self.validated_file.as_ref().ok_or(ImportError::NotValidated)?;
        let summary = backend.import_file(file)?;

        self.state = ImportState::Imported;
        Ok(summary)
    }

    /// Ask the server to drop all imported data, then forget both files.
    ///
    /// Confirmation is the caller's job; this is the irreversible part.
    pub fn reset<B: ImportBackend>(&mut self, backend: &B) -> Result<(), ImportError> {
        backend.reset_data()?;

        self.state = ImportState::Idle;
        self.selected_file = None;
        self.validated_file = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Scriptable fake transport; records every file it was handed.
    #[derive(Default)]
    struct FakeBackend {
        fail_validate: bool,
        fail_import: bool,
        fail_reset: bool,
        validated: RefCell<Vec<PathBuf>>,
        imported: RefCell<Vec<PathBuf>>,
    }

    fn server_error() -> ApiError {
        ApiError::Server {
            status: 400,
            body: "bad spreadsheet".to_string(),
        }
    }

    impl ImportBackend for FakeBackend {
        fn validate_file(&self, file: &Path) -> Result<String, ApiError> {
            if self.fail_validate {
                return Err(server_error());
            }
            self.validated.borrow_mut().push(file.to_path_buf());
            Ok("Excel validated successfully!".to_string())
        }

        fn import_file(&self, file: &Path) -> Result<ImportSummary, ApiError> {
            if self.fail_import {
                return Err(server_error());
            }
            self.imported.borrow_mut().push(file.to_path_buf());
            let mut counts = BTreeMap::new();
            counts.insert("students".to_string(), "25".to_string());
            Ok(ImportSummary::Counts(counts))
        }

        fn reset_data(&self) -> Result<(), ApiError> {
            if self.fail_reset {
                return Err(server_error());
            }
            Ok(())
        }
    }

    #[test]
    fn validate_requires_a_selected_file() {
        let backend = FakeBackend::default();
        let mut session = ImportSession::new();

        assert!(matches!(
            session.validate(&backend),
            Err(ImportError::NoFileSelected)
        ));
        assert_eq!(session.state(), ImportState::Idle);
        assert!(backend.validated.borrow().is_empty());
    }

    #[test]
    fn reselecting_discards_validation() {
        let backend = FakeBackend::default();
        let mut session = ImportSession::new();

        session.select_file(PathBuf::from("a.xlsx"));
        session.validate(&backend).unwrap();
        assert_eq!(session.state(), ImportState::Validated);

        // A new selection has not been seen by the server
        session.select_file(PathBuf::from("b.xlsx"));
        assert_eq!(session.state(), ImportState::Idle);
        assert_eq!(session.validated_file(), None);
        assert!(matches!(
            session.import(&backend),
            Err(ImportError::NotValidated)
        ));
        assert!(backend.imported.borrow().is_empty());
    }

    #[test]
    fn failed_validation_blocks_import() {
        let backend = FakeBackend {
            fail_validate: true,
            ..FakeBackend::default()
        };
        let mut session = ImportSession::new();

        session.select_file(PathBuf::from("a.xlsx"));
        assert!(matches!(session.validate(&backend), Err(ImportError::Api(_))));
        assert_eq!(session.state(), ImportState::Idle);
        // The file stays selected for a retry
        assert_eq!(session.selected_file(), Some(Path::new("a.xlsx")));
        assert!(matches!(
            session.import(&backend),
            Err(ImportError::NotValidated)
        ));
    }

    #[test]
    fn validate_then_import_carries_the_same_file() {
        let backend = FakeBackend::default();
        let mut session = ImportSession::new();

        session.select_file(PathBuf::from("roster.xlsx"));
        let msg = session.validate(&backend).unwrap();
        assert_eq!(msg, "Excel validated successfully!");
        assert_eq!(session.selected_file(), None);
        assert_eq!(session.validated_file(), Some(Path::new("roster.xlsx")));

        let summary = session.import(&backend).unwrap();
        assert_eq!(session.state(), ImportState::Imported);
        assert_eq!(summary.to_string(), "students: 25");
        assert_eq!(backend.imported.borrow().as_slice(), [PathBuf::from("roster.xlsx")]);
    }

    #[test]
    fn repeat_import_issues_a_fresh_call() {
        let backend = FakeBackend::default();
        let mut session = ImportSession::new();

        session.select_file(PathBuf::from("roster.xlsx"));
        session.validate(&backend).unwrap();
        session.import(&backend).unwrap();
        session.import(&backend).unwrap();

        assert_eq!(session.state(), ImportState::Imported);
        assert_eq!(backend.imported.borrow().len(), 2);
    }

    #[test]
    fn failed_import_leaves_state_retryable() {
        let flaky = FakeBackend {
            fail_import: true,
            ..FakeBackend::default()
        };
        let mut session = ImportSession::new();

        session.select_file(PathBuf::from("roster.xlsx"));
        session.validate(&flaky).unwrap();
        assert!(matches!(session.import(&flaky), Err(ImportError::Api(_))));
        assert_eq!(session.state(), ImportState::Validated);

        // Same session retried against a working transport succeeds
        let working = FakeBackend::default();
        session.import(&working).unwrap();
        assert_eq!(session.state(), ImportState::Imported);
    }

    #[test]
    fn reset_clears_everything_on_success_only() {
        let backend = FakeBackend::default();
        let mut session = ImportSession::new();
        session.select_file(PathBuf::from("a.xlsx"));
        session.validate(&backend).unwrap();

        let failing = FakeBackend {
            fail_reset: true,
            ..FakeBackend::default()
        };
        assert!(session.reset(&failing).is_err());
        assert_eq!(session.state(), ImportState::Validated);
        assert!(session.validated_file().is_some());

        session.reset(&backend).unwrap();
        assert_eq!(session.state(), ImportState::Idle);
        assert_eq!(session.selected_file(), None);
        assert_eq!(session.validated_file(), None);
    }

    #[test]
    fn summary_counts_render_one_pair_per_line() {
        let mut counts = BTreeMap::new();
        counts.insert("classes".to_string(), "4".to_string());
        counts.insert("students".to_string(), "120".to_string());
        let summary = ImportSummary::Counts(counts);
        assert_eq!(summary.to_string(), "classes: 4\nstudents: 120");
    }
}
