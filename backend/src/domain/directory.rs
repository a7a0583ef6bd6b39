//! Staff roles and the phone-directory projection used by the fan-out.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard roles eligible to receive notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Day-to-day facility administrator.
    Admin,
    /// Tenant-wide administrator.
    Superadmin,
    /// Handles physical key handover for approved dormitory bookings.
    Keyholder,
    /// Manages rentable store inventory.
    StoreManager,
    /// Represents a registered company tenant.
    CompanyRepresentative,
}

impl StaffRole {
    /// Stable string form used in persistence and query parameters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
            Self::Keyholder => "keyholder",
            Self::StoreManager => "store_manager",
            Self::CompanyRepresentative => "company_representative",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored role string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown staff role: {value}")]
pub struct UnknownRoleError {
    /// The unrecognised role string.
    pub value: String,
}

impl FromStr for StaffRole {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "superadmin" => Ok(Self::Superadmin),
            "keyholder" => Ok(Self::Keyholder),
            "store_manager" => Ok(Self::StoreManager),
            "company_representative" => Ok(Self::CompanyRepresentative),
            other => Err(UnknownRoleError {
                value: other.to_owned(),
            }),
        }
    }
}

/// One user record as seen by the phone directory.
///
/// Phone is optional: accounts created before the phone field existed carry
/// none, and some never add one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Account email, used only for log context.
    pub email: String,
    /// Raw phone number as stored; normalisation happens at send time.
    pub phone: Option<String>,
    /// Dashboard role of the account.
    pub role: StaffRole,
}

/// Project directory entries onto the notification-eligible phone list.
///
/// Set semantics: duplicates collapse to their first occurrence and
/// blank or absent numbers are dropped. Order follows first appearance.
#[must_use]
pub fn eligible_phone_numbers(entries: &[DirectoryEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(|entry| entry.phone.as_deref())
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
        .filter(|phone| seen.insert(phone.to_owned()))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    //! Set semantics of the phone projection.

    use super::*;

    fn entry(email: &str, phone: Option<&str>, role: StaffRole) -> DirectoryEntry {
        DirectoryEntry {
            email: email.to_owned(),
            phone: phone.map(str::to_owned),
            role,
        }
    }

    #[test]
    fn deduplicates_and_drops_blank_numbers() {
        let entries = vec![
            entry("a@example.com", Some("0911111111"), StaffRole::Admin),
            entry("b@example.com", Some("0911111111"), StaffRole::Superadmin),
            entry("c@example.com", Some(""), StaffRole::Admin),
            entry("d@example.com", Some("   "), StaffRole::Admin),
            entry("e@example.com", None, StaffRole::Admin),
            entry("f@example.com", Some("0922222222"), StaffRole::Admin),
        ];

        assert_eq!(
            eligible_phone_numbers(&entries),
            vec!["0911111111", "0922222222"]
        );
    }

    #[test]
    fn preserves_first_seen_order() {
        let entries = vec![
            entry("a@example.com", Some("0933333333"), StaffRole::Keyholder),
            entry("b@example.com", Some("0911111111"), StaffRole::Keyholder),
            entry("c@example.com", Some("0933333333"), StaffRole::Keyholder),
        ];

        assert_eq!(
            eligible_phone_numbers(&entries),
            vec!["0933333333", "0911111111"]
        );
    }

    #[test]
    fn role_round_trips_through_its_string_form() {
        for role in [
            StaffRole::Admin,
            StaffRole::Superadmin,
            StaffRole::Keyholder,
            StaffRole::StoreManager,
            StaffRole::CompanyRepresentative,
        ] {
            assert_eq!(role.as_str().parse::<StaffRole>(), Ok(role));
        }
        assert!("janitor".parse::<StaffRole>().is_err());
    }
}
