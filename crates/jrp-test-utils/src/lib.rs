//! Shared test fixtures for the JRP Template Manager workspace.
//!
//! Keeps the command unit tests and the CLI end-to-end tests building their
//! on-disk fixtures from one place. Dev-dependency only; never published.

pub mod fixtures;
