//! Booking aggregate as received from the booking workflow.
//!
//! This subsystem never creates or mutates bookings; it reads them to
//! compose notifications. The serde contract (camelCase) matches the
//! booking service's event payloads.

use serde::{Deserialize, Serialize};

use crate::domain::datetime::DateInput;

/// Rental category of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingCategory {
    /// Dormitory room rental.
    Dormitory,
    /// Hall or other facility rental.
    Facility,
}

impl BookingCategory {
    /// Stable string form used in message text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dormitory => "dormitory",
            Self::Facility => "facility",
        }
    }
}

/// Approval lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting an admin decision.
    Pending,
    /// Approved for the requested dates.
    Approved,
    /// Declined.
    Rejected,
}

/// Payment-proof lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// No payment proof submitted yet.
    Unpaid,
    /// Proof uploaded, awaiting verification.
    ProofUploaded,
    /// Payment verified by an admin.
    Verified,
}

/// One booked item (a room, hall, or piece of equipment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    /// Display name of the item.
    pub name: String,
}

/// A rental request, read-only from this subsystem's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking identifier as issued by the booking store.
    pub id: String,
    /// Rental category, which selects the admin view deep link.
    pub category: BookingCategory,
    /// Guest name or company name, depending on the requester.
    pub requester: String,
    /// Items covered by the booking.
    pub items: Vec<BookingItem>,
    /// Assigned room, when the category is dormitory.
    #[serde(default)]
    pub room: Option<String>,
    /// Start of the rental period.
    #[schema(value_type = String, example = "2026-09-12")]
    pub check_in: DateInput,
    /// End of the rental period.
    #[schema(value_type = String, example = "2026-09-19")]
    pub check_out: DateInput,
    /// Total cost in whole birr.
    pub total_cost_birr: i64,
    /// Current approval state.
    pub approval_status: ApprovalStatus,
    /// Current payment state.
    pub payment_status: PaymentStatus,
}

impl Booking {
    /// Identifier truncated for human-readable references.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.chars().take(8).collect()
    }

    /// Item names joined for message text; `-` when the list is empty.
    #[must_use]
    pub fn item_names(&self) -> String {
        if self.items.is_empty() {
            return "-".to_owned();
        }
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
