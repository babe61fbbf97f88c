//! Service context - dependency container for services
//!
//! Holds the repositories, entity caches, the start-up tag table and the
//! fallback icon. Everything is shared behind `Arc`, so cloning the context
//! is cheap and every clone sees the same caches.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use stream_cache::{CacheSettings, EntityCaches};
use stream_common::AppConfig;
use stream_core::entities::{FallbackIcon, TagTable};
use stream_core::error::DomainError;
use stream_core::traits::{
    IconRepository, LivecommentRepository, LivestreamRepository, ReactionRepository, RepoResult,
    ReportRepository, StatisticsRepository, TagRepository, ThemeRepository, UserRepository,
};
use stream_db::{
    PgIconRepository, PgLivecommentRepository, PgLivestreamRepository, PgPool,
    PgReactionRepository, PgReportRepository, PgStatisticsRepository, PgTagRepository,
    PgThemeRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    theme_repo: Arc<dyn ThemeRepository>,
    icon_repo: Arc<dyn IconRepository>,
    livestream_repo: Arc<dyn LivestreamRepository>,
    livecomment_repo: Arc<dyn LivecommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    report_repo: Arc<dyn ReportRepository>,
    statistics_repo: Arc<dyn StatisticsRepository>,

    // Caches and start-up data
    caches: Arc<EntityCaches>,
    tags: Arc<TagTable>,
    fallback_icon: Arc<FallbackIcon>,

    query_timeout: Duration,
}

impl ServiceContext {
    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Wire the PostgreSQL repositories over `pool` and load start-up data
    ///
    /// Reads the fallback icon from disk and the full tag table from the
    /// database; both stay fixed for the life of the context.
    pub async fn from_pool(pool: PgPool, config: &AppConfig) -> ServiceResult<Self> {
        let fallback_icon = FallbackIcon::load(&config.fallback_icon_path).map_err(|e| {
            ServiceError::internal(format!(
                "failed to read fallback icon {}: {e}",
                config.fallback_icon_path
            ))
        })?;

        let tags = PgTagRepository::new(pool.clone()).find_all().await?;
        info!(tags = tags.len(), "Tag table loaded");

        ServiceContextBuilder::new()
            .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .theme_repo(Arc::new(PgThemeRepository::new(pool.clone())))
            .icon_repo(Arc::new(PgIconRepository::new(pool.clone())))
            .livestream_repo(Arc::new(PgLivestreamRepository::new(pool.clone())))
            .livecomment_repo(Arc::new(PgLivecommentRepository::new(pool.clone())))
            .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
            .report_repo(Arc::new(PgReportRepository::new(pool.clone())))
            .statistics_repo(Arc::new(PgStatisticsRepository::new(pool)))
            .caches(EntityCaches::new(&CacheSettings::from(&config.cache)))
            .tags(TagTable::from_tags(tags))
            .fallback_icon(fallback_icon)
            .query_timeout(config.query_timeout())
            .build()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn theme_repo(&self) -> &dyn ThemeRepository {
        self.theme_repo.as_ref()
    }

    pub fn icon_repo(&self) -> &dyn IconRepository {
        self.icon_repo.as_ref()
    }

    pub fn livestream_repo(&self) -> &dyn LivestreamRepository {
        self.livestream_repo.as_ref()
    }

    pub fn livecomment_repo(&self) -> &dyn LivecommentRepository {
        self.livecomment_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    pub fn statistics_repo(&self) -> &dyn StatisticsRepository {
        self.statistics_repo.as_ref()
    }

    // === Caches and start-up data ===

    /// Get the entity caches
    pub fn caches(&self) -> &EntityCaches {
        self.caches.as_ref()
    }

    /// Get the immutable tag table
    pub fn tags(&self) -> &TagTable {
        self.tags.as_ref()
    }

    /// Get the fallback icon served to users without an upload
    pub fn fallback_icon(&self) -> &FallbackIcon {
        self.fallback_icon.as_ref()
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Run one store call under the configured deadline
    ///
    /// Dropping the returned future cancels the in-flight call.
    pub async fn query<T, F>(&self, call: F) -> RepoResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        tokio::time::timeout(self.query_timeout, call)
            .await
            .map_err(|_| DomainError::QueryTimeout(self.query_timeout))?
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("caches", &self.caches)
            .field("tags", &self.tags.len())
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    theme_repo: Option<Arc<dyn ThemeRepository>>,
    icon_repo: Option<Arc<dyn IconRepository>>,
    livestream_repo: Option<Arc<dyn LivestreamRepository>>,
    livecomment_repo: Option<Arc<dyn LivecommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    statistics_repo: Option<Arc<dyn StatisticsRepository>>,
    caches: Option<EntityCaches>,
    tags: Option<TagTable>,
    fallback_icon: Option<FallbackIcon>,
    query_timeout: Option<Duration>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn theme_repo(mut self, repo: Arc<dyn ThemeRepository>) -> Self {
        self.theme_repo = Some(repo);
        self
    }

    pub fn icon_repo(mut self, repo: Arc<dyn IconRepository>) -> Self {
        self.icon_repo = Some(repo);
        self
    }

    pub fn livestream_repo(mut self, repo: Arc<dyn LivestreamRepository>) -> Self {
        self.livestream_repo = Some(repo);
        self
    }

    pub fn livecomment_repo(mut self, repo: Arc<dyn LivecommentRepository>) -> Self {
        self.livecomment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn statistics_repo(mut self, repo: Arc<dyn StatisticsRepository>) -> Self {
        self.statistics_repo = Some(repo);
        self
    }

    /// Use these caches instead of fresh ones with default lifetimes
    pub fn caches(mut self, caches: EntityCaches) -> Self {
        self.caches = Some(caches);
        self
    }

    pub fn tags(mut self, tags: TagTable) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn fallback_icon(mut self, icon: FallbackIcon) -> Self {
        self.fallback_icon = Some(icon);
        self
    }

    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            theme_repo: required(self.theme_repo, "theme_repo")?,
            icon_repo: required(self.icon_repo, "icon_repo")?,
            livestream_repo: required(self.livestream_repo, "livestream_repo")?,
            livecomment_repo: required(self.livecomment_repo, "livecomment_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            report_repo: required(self.report_repo, "report_repo")?,
            statistics_repo: required(self.statistics_repo, "statistics_repo")?,
            caches: Arc::new(self.caches.unwrap_or_default()),
            tags: Arc::new(required(self.tags, "tags")?),
            fallback_icon: Arc::new(required(self.fallback_icon, "fallback_icon")?),
            query_timeout: self.query_timeout.unwrap_or(DEFAULT_QUERY_TIMEOUT),
        })
    }
}
