// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum StoreError {
    /// A row with the same case-folded name already exists.
    DuplicateName(String),
    /// No row with the given id.
    NotFound(i64),
    /// A persisted row failed domain validation on read.
    Corrupt(String),
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "skill name already exists: {name}"),
            Self::NotFound(id) => write!(f, "skill not found: id={id}"),
            Self::Corrupt(msg) => write!(f, "corrupt skill row: {msg}"),
            Self::Sqlite(e) => write!(f, "sqlite failure: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sqlite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Sqlite(e)
    }
}

impl StoreError {
    pub(crate) fn from_write(e: rusqlite::Error, name: &str) -> Self {
        if e.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation) {
            return Self::DuplicateName(name.to_string());
        }
        Self::Sqlite(e)
    }
}
