//! Typed request/response schemas for the back-office API
//!
//! The server speaks camelCase JSON with GUID ids; a nil GUID stands in for
//! "no id yet" on create. Every endpoint body is a named struct here so
//! response shapes are decided by the parser, never probed at use sites.

pub mod ledger;
pub mod school_class;
pub mod student;
pub mod subject;
pub mod teacher;

pub use ledger::{AccountType, LedgerAccount, LedgerFilter};
pub use school_class::{ClassFilter, SchoolClass};
pub use student::{Student, StudentFilter};
pub use subject::{Subject, SubjectFilter};
pub use teacher::{Teacher, TeacherFilter};

/// Page size the dashboard used for its tables
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page size used when loading a full reference list (e.g. classes for a
/// class picker)
pub const LOOKUP_PAGE_SIZE: u32 = 100;
