//! HTTP boundary to the back-office REST API

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{DetailEnvelope, ListPage};
