//! Notification subsystem for the facility rental platform.
//!
//! Reacts to booking lifecycle events by texting the relevant staff and
//! recording in-app alerts for the admin dashboard. Structured as a
//! hexagon: `domain` holds the fan-out logic behind ports, `outbound`
//! provides the SMS and PostgreSQL adapters, and `inbound::http` exposes
//! the webhooks and inbox endpoints.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by debug builds and tooling.
pub use doc::ApiDoc;
