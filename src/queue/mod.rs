//! Queued units of work and the worker that executes them.
//!
//! Two unit shapes exist: a full fetch-plus-generation cycle, and the
//! publication of a single poll. Workers claim units in FIFO order and
//! run each to completion; there is no mid-flight cancellation. Ordering
//! safety for units addressing the same poll comes entirely from the
//! per-operation guards in the poll domain, not from the queue. The
//! module follows hexagonal architecture:
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
