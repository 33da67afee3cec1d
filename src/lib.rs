//! Agora: social-poll lifecycle engine.
//!
//! Agora ingests social-media posts matching configured hashtags, asks a
//! language model to draft candidate polls, routes the drafts through a
//! human moderation gate, and publishes approved polls back to the social
//! network. The crate owns the poll lifecycle: the state machine governing
//! a record from creation through moderation to publication, the queued
//! units of work that drive transitions asynchronously, and the storage
//! contract that keeps those transitions consistent under concurrent
//! writers.
//!
//! # Architecture
//!
//! Agora follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! The HTTP layer, credential loading, and the concrete social-network and
//! language-model clients are external collaborators reached through ports.
//!
//! # Modules
//!
//! - [`poll`]: Poll records, moderation, generation, and publication
//! - [`queue`]: Queued units of work and the worker that executes them
//! - [`settings`]: Runtime-overridable application settings

pub mod poll;
pub mod queue;
pub mod settings;
