//! Command implementations

pub mod class;
pub mod completions;
pub mod data;
pub mod ledger;
pub mod login;
pub mod student;
pub mod teacher;
