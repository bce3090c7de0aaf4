//! Shared layout and drag physics for two UI front ends.
//!
//! [`layout`] holds the calculators: range normalization, action-button
//! orientation, rubber-band drag physics, text-driven sizing and the modal
//! presentation state machine. [`frontends`] holds a retained and a reactive
//! adapter that lower component models through those calculators into the
//! same [`frontends::Scene`]. [`config`] loads and validates the tunables.
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod config;
pub mod error;
pub mod frontends;
pub mod layout;

pub use error::{ConfigError, Sanitized};
