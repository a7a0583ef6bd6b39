//! Diesel-backed `UserDirectory` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::directory::{DirectoryEntry, StaffRole};
use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::outbound::persistence::pool::DbPool;
use crate::outbound::persistence::schema::users;

/// Role-filtered directory reads from the `users` table.
#[derive(Clone)]
pub struct DieselUserDirectory {
    pool: DbPool,
}

impl DieselUserDirectory {
    /// Create an adapter over the given pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for DieselUserDirectory {
    async fn entries_with_roles(
        &self,
        roles: &[StaffRole],
    ) -> Result<Vec<DirectoryEntry>, UserDirectoryError> {
        let role_values: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| UserDirectoryError::connection(err.to_string()))?;

        let rows: Vec<(String, Option<String>, String)> = users::table
            .filter(users::role.eq_any(role_values))
            .select((users::email, users::phone, users::role))
            .load(&mut conn)
            .await
            .map_err(|err| UserDirectoryError::query(err.to_string()))?;

        Ok(rows
            .into_iter()
            .filter_map(|(email, phone, role)| match role.parse::<StaffRole>() {
                Ok(role) => Some(DirectoryEntry { email, phone, role }),
                Err(err) => {
                    // One corrupt row must not abort a broadcast.
                    warn!(email, error = %err, "skipping directory row with unknown role");
                    None
                }
            })
            .collect())
    }
}
