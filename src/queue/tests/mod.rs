//! Unit tests for the queue context.

mod queue_tests;
