//! Domain entities, ports, and services for the booking-notification
//! pipeline.
//!
//! Purpose: model bookings, staff directory entries, and admin notifications
//! as strongly typed entities, and orchestrate the notification fan-out
//! behind adapter-agnostic ports. Types stay immutable where possible and
//! document their invariants and serde contracts in each type's Rustdoc.

pub mod booking;
pub mod datetime;
pub mod directory;
pub mod fan_out;
pub mod notification;
pub mod phone;
pub mod ports;

pub use self::booking::{ApprovalStatus, Booking, BookingCategory, BookingItem, PaymentStatus};
pub use self::datetime::{DateInput, DateParseError};
pub use self::directory::{DirectoryEntry, StaffRole, UnknownRoleError, eligible_phone_numbers};
pub use self::fan_out::{FanOutReport, NotificationFanOut, NotificationOutcome, SmsDispatch};
pub use self::notification::{
    AdminNotification, NewAdminNotification, NotificationKind, UnknownKindError,
};
pub use self::phone::{Msisdn, PhoneNumberError};
