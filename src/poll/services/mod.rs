//! Service layer for the poll lifecycle stages.

pub mod cycle;
pub mod fetch;
pub mod generation;
pub mod moderation;
pub mod publish;

pub use cycle::{CycleError, CycleReport, CycleService};
pub use fetch::{FetchService, FORWARDED_POST_CAP};
pub use generation::{GenerationError, GenerationOutcome, GenerationService};
pub use moderation::{ModerationError, ModerationResult, ModerationService, PollStats};
pub use publish::{PublishError, PublishOutcome, PublishService};
