//! schoolctl: terminal admin client for the school-management back office
//!
//! A thin, typed client over the school ERP's REST API: sign in, browse and
//! edit students, teachers, classes and ledger accounts, and run the bulk
//! spreadsheet import workflow (validate, then import).

pub mod api;
pub mod cli;
pub mod core;
pub mod entities;
