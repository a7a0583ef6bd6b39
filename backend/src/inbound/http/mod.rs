//! HTTP adapter: booking-event webhooks, the notification inbox, and
//! health probes.

pub mod events;
pub mod health;
pub mod notifications;
pub mod state;

pub use state::HttpState;
