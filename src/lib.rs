//! Booking engine for club competition reservations.
//!
//! Member clubs reserve places at scheduled competitions, paying with a
//! shared points balance, capped at 12 places per club per competition.
//! This crate owns the admission rules and the ledger update; routing,
//! rendering and notification belong to the embedding application.
//!
//! - [`domain`] — the `Club` and `Competition` records plus the pure
//!   booking rules (validation, ledger apply, competition clock).
//! - [`ports`] — the record-store trait the engine reads and writes through.
//! - [`adapters`] — an in-memory store and a store over the legacy JSON
//!   files.
//! - [`commands`] — the `tower::Service` entry points: book places, find a
//!   club by email, list competitions.

pub mod adapters;
pub mod commands;
pub mod domain;
pub mod ports;
