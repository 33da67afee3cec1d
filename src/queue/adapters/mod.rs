//! Adapter implementations of the queue ports.

pub mod memory;

pub use memory::InMemoryJobQueue;
