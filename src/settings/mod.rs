//! Runtime-overridable application settings.
//!
//! Settings are loaded from the environment once at startup as defaults,
//! persisted separately from poll records, and re-read by the fetch and
//! generation stages on every invocation so live edits take effect without
//! a restart. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
