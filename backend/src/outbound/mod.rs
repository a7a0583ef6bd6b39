//! Outbound adapters: SMS provider transport and PostgreSQL persistence.

pub mod persistence;
pub mod sms;
