//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on
//! domain ports, so they stay testable without network or database I/O.

use std::sync::Arc;

use crate::domain::fan_out::NotificationFanOut;
use crate::domain::ports::{NotificationRepository, SmsGateway, UserDirectory};

/// Fan-out service over trait objects, as wired at startup.
pub type SharedFanOut = NotificationFanOut<dyn UserDirectory, dyn SmsGateway, dyn NotificationRepository>;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Booking-event fan-out service.
    pub fan_out: Arc<SharedFanOut>,
    /// Notification store, read directly by the inbox endpoints.
    pub notifications: Arc<dyn NotificationRepository>,
}
