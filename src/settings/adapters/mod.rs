//! Adapter implementations of the settings ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemorySettingsRepository;
pub use postgres::{PostgresSettingsRepository, SettingsPgPool};
