//! Graph store credentials read from a local secret file

use crate::LoaderError;
use std::fmt;
use std::path::Path;

/// Username and password for the graph store
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Read the file at `path`: username on the first line, password on the second
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoaderError::CredentialsIo {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text).map_err(|reason| LoaderError::CredentialsFormat {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse the two-line format; surrounding whitespace on each line is ignored
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut lines = text.lines().map(str::trim);

        let username = match lines.next() {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => return Err("first line must hold the username".to_string()),
        };
        let password = match lines.next() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => return Err("second line must hold the password".to_string()),
        };

        Ok(Self { username, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
