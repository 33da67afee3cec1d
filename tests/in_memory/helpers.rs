//! Shared test helpers for in-memory lifecycle integration tests.

use agora::poll::{
    adapters::InMemoryPollRepository,
    domain::{PostId, PostSummary, PublishedPollRef},
    ports::{SocialNetwork, UpstreamError, UpstreamResult},
    services::{CycleService, FetchService, GenerationService, ModerationService, PublishService},
};
use agora::settings::{adapters::InMemorySettingsRepository, domain::Hashtag};
use async_trait::async_trait;
use chrono::Utc;
use mockable::DefaultClock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Social-network stub that replays scripted results in order.
#[derive(Debug, Default)]
pub struct ScriptedSocialNetwork {
    search_results: Mutex<VecDeque<UpstreamResult<Vec<PostSummary>>>>,
    create_results: Mutex<VecDeque<UpstreamResult<PublishedPollRef>>>,
    create_calls: AtomicUsize,
}

impl ScriptedSocialNetwork {
    /// Creates a stub with no scripted results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next `search_posts` result.
    pub fn script_search(&self, result: UpstreamResult<Vec<PostSummary>>) {
        self.search_results
            .lock()
            .expect("search script lock")
            .push_back(result);
    }

    /// Queues the next `create_poll` result.
    pub fn script_create(&self, result: UpstreamResult<PublishedPollRef>) {
        self.create_results
            .lock()
            .expect("create script lock")
            .push_back(result);
    }

    /// Returns how many times `create_poll` was invoked.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SocialNetwork for ScriptedSocialNetwork {
    async fn search_posts(
        &self,
        _hashtags: &[Hashtag],
        _limit: agora::settings::domain::PostLimit,
    ) -> UpstreamResult<Vec<PostSummary>> {
        self.search_results
            .lock()
            .expect("search script lock")
            .pop_front()
            .unwrap_or_else(|| Err(UpstreamError::Network("no scripted search".to_owned())))
    }

    async fn create_poll(
        &self,
        _question: &agora::poll::domain::QuestionText,
        _options: &agora::poll::domain::PollOptions,
        _duration: agora::poll::domain::DurationHours,
    ) -> UpstreamResult<PublishedPollRef> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_results
            .lock()
            .expect("create script lock")
            .pop_front()
            .unwrap_or_else(|| Err(UpstreamError::Network("no scripted create".to_owned())))
    }
}

/// Language-model stub that replays scripted completions in order.
#[derive(Debug, Default)]
pub struct ScriptedLanguageModel {
    completions: Mutex<VecDeque<UpstreamResult<String>>>,
}

impl ScriptedLanguageModel {
    /// Creates a stub with no scripted completions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next `complete` result.
    pub fn script(&self, result: UpstreamResult<String>) {
        self.completions
            .lock()
            .expect("completion script lock")
            .push_back(result);
    }
}

#[async_trait]
impl agora::poll::ports::LanguageModel for ScriptedLanguageModel {
    async fn complete(
        &self,
        _request: &agora::poll::ports::CompletionRequest,
    ) -> UpstreamResult<String> {
        self.completions
            .lock()
            .expect("completion script lock")
            .pop_front()
            .unwrap_or_else(|| Err(UpstreamError::Network("no scripted completion".to_owned())))
    }
}

/// Fully wired service set over in-memory storage and scripted
/// capabilities.
pub struct Harness {
    /// Shared poll storage.
    pub repository: Arc<InMemoryPollRepository>,
    /// Scripted social-network capability.
    pub social: Arc<ScriptedSocialNetwork>,
    /// Scripted language-model capability.
    pub model: Arc<ScriptedLanguageModel>,
    /// Cycle orchestrator under test.
    pub cycle: CycleService<
        ScriptedSocialNetwork,
        ScriptedLanguageModel,
        InMemoryPollRepository,
        InMemorySettingsRepository,
        DefaultClock,
    >,
    /// Moderation gate under test.
    pub moderation: ModerationService<InMemoryPollRepository, DefaultClock>,
    /// Publish stage under test.
    pub publish: PublishService<InMemoryPollRepository, ScriptedSocialNetwork, DefaultClock>,
}

impl Harness {
    /// Wires fresh services over empty storage.
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryPollRepository::new());
        let settings = Arc::new(InMemorySettingsRepository::new());
        let social = Arc::new(ScriptedSocialNetwork::new());
        let model = Arc::new(ScriptedLanguageModel::new());
        let clock = Arc::new(DefaultClock);

        let cycle = CycleService::new(
            FetchService::new(Arc::clone(&social)),
            GenerationService::new(
                Arc::clone(&model),
                Arc::clone(&repository),
                Arc::clone(&clock),
            ),
            Arc::clone(&repository),
            settings,
        );
        let moderation = ModerationService::new(Arc::clone(&repository), Arc::clone(&clock));
        let publish = PublishService::new(
            Arc::clone(&repository),
            Arc::clone(&social),
            Arc::clone(&clock),
        );

        Self {
            repository,
            social,
            model,
            cycle,
            moderation,
            publish,
        }
    }
}

/// Builds a normalized post summary for scripting search results.
pub fn post(id: &str, text: &str) -> PostSummary {
    PostSummary::new(
        PostId::new(id).expect("valid post id"),
        text,
        "alice",
        Utc::now(),
        Hashtag::new("uspol").expect("valid hashtag"),
    )
}
