//! In-memory adapters for the poll ports.

mod poll;

pub use poll::InMemoryPollRepository;
