//! `PostgreSQL` adapter for poll persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PollPgPool, PostgresPollRepository};
