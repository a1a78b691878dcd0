//! Auth session handling
//!
//! The server hands back a bearer token on login. Rather than an ambient
//! global, the token lives in an explicit `Session` value with read, set and
//! clear operations, persisted under the user config dir so separate
//! invocations share one sign-in.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::Config;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Not signed in. Run `schoolctl login` first.")]
    NotSignedIn,

    #[error("No writable config directory for this user")]
    NoConfigDir,

    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
}

/// The current sign-in, if any
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Load the persisted session; absent or empty token files mean
    /// "not signed in", never an error.
    pub fn load() -> Self {
        let token = Self::token_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty());
        Self { token }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer token; errors when not signed in.
    pub fn token(&self) -> Result<&str, SessionError> {
        self.token.as_deref().ok_or(SessionError::NotSignedIn)
    }

    /// Store a fresh token and persist it.
    pub fn set(&mut self, token: String) -> Result<(), SessionError> {
        let path = Self::token_path().ok_or(SessionError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Forget the token and remove the persisted copy.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.token = None;
        if let Some(path) = Self::token_path() {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn token_path() -> Option<PathBuf> {
        Config::config_dir().map(|dir| dir.join("token"))
    }

    /// A session that only lives in memory, for tests.
    #[cfg(test)]
    pub fn in_memory(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_signed_in());
        assert!(matches!(session.token(), Err(SessionError::NotSignedIn)));
    }

    #[test]
    fn in_memory_session_reads_back() {
        let session = Session::in_memory("tok-123");
        assert!(session.is_signed_in());
        assert_eq!(session.token().unwrap(), "tok-123");
    }
}
