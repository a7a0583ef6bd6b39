//! Driven port for role-filtered user directory reads.
//!
//! The fan-out service asks this port for the user records of a role set
//! and projects the result onto phone numbers. Production backs it with a
//! repository adapter; tests use a deterministic mock.

use async_trait::async_trait;

use crate::domain::directory::{DirectoryEntry, StaffRole};

/// Errors surfaced while reading the user directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserDirectoryError {
    /// The backing store could not be reached.
    #[error("user directory unavailable: {message}")]
    Connection {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The query itself failed.
    #[error("user directory query failed: {message}")]
    Query {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl UserDirectoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for fetching directory entries by role.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return every user record whose role is in `roles`.
    ///
    /// No pagination: the eligible-recipient set is bounded by staff
    /// headcount.
    async fn entries_with_roles(
        &self,
        roles: &[StaffRole],
    ) -> Result<Vec<DirectoryEntry>, UserDirectoryError>;
}

/// Fixture directory with no users, for wiring without a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn entries_with_roles(
        &self,
        _roles: &[StaffRole],
    ) -> Result<Vec<DirectoryEntry>, UserDirectoryError> {
        Ok(Vec::new())
    }
}
