//! Unit tests for the poll context.

mod repository_tests;
mod state_transition_tests;
