//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; regenerate with
//! `diesel print-schema` after any migration change.

diesel::table! {
    /// Staff and tenant accounts.
    ///
    /// The phone directory reads this table filtered by role; `phone` is
    /// nullable because not every account has one on file.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Account email address.
        email -> Varchar,
        /// Raw phone number as entered, if any.
        phone -> Nullable<Varchar>,
        /// Dashboard role (stable string form of `StaffRole`).
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only in-app notifications for dashboard roles.
    admin_notifications (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable alert text.
        message -> Text,
        /// Event kind (stable string form of `NotificationKind`).
        kind -> Varchar,
        /// Booking the alert refers to.
        related_booking_id -> Varchar,
        /// Dashboard role the alert targets.
        recipient_role -> Varchar,
        /// Whether the recipient has opened the alert.
        is_read -> Bool,
        /// Relative deep link into the relevant admin view.
        link -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, admin_notifications);
