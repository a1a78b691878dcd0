//! Core module - configuration, session and the form/import logic

pub mod config;
pub mod import;
pub mod session;
pub mod validate;

pub use config::Config;
pub use import::{ImportBackend, ImportError, ImportSession, ImportState, ImportSummary};
pub use session::{Session, SessionError};
pub use validate::{check, normalize_date, FieldConstraint, FieldKind};
