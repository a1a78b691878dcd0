//! API error taxonomy
//!
//! Success versus failure is decided exactly once, at the call boundary:
//! a non-2xx status is a server rejection carrying the raw payload, a
//! transport problem is its own variant, and a 2xx body of the wrong shape is
//! a shape error. Callers branch on the variant, never on response contents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not signed in. Run `schoolctl login` first.")]
    NoSession,

    #[error("Server rejected the request ({status}):\n{body}")]
    Server { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response shape:\n{0}")]
    Shape(String),

    #[error("Failed to access {path}: {source}")]
    LocalFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub(crate) fn local_file(path: &std::path::Path, source: std::io::Error) -> Self {
        ApiError::LocalFile {
            path: path.display().to_string(),
            source,
        }
    }
}
