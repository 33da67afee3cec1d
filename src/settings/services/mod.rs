//! Service layer for reading and updating runtime settings.

pub mod runtime;

pub use runtime::{SettingsError, SettingsResult, SettingsService};
