//! Adapter implementations of the poll ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPollRepository;
pub use postgres::{PollPgPool, PostgresPollRepository};
