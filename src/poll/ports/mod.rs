//! Port contracts for poll storage and external capabilities.

pub mod language_model;
pub mod repository;
pub mod social;
pub mod upstream;

pub use language_model::{CompletionRequest, LanguageModel};
pub use repository::{PollPage, PollRepository, PollRepositoryError, PollRepositoryResult};
pub use social::SocialNetwork;
pub use upstream::{UpstreamError, UpstreamResult};

#[cfg(test)]
pub use language_model::MockLanguageModel;
#[cfg(test)]
pub use social::MockSocialNetwork;
