use crate::client::FacebookProvider;
use crate::config::FacebookConfig;
use crate::errors::ProviderError;
use crate::models::{Leaderboard, PageData, Score, SocialProvider};

/// Capability surface every game-services provider adapter offers
#[async_trait::async_trait]
pub trait GameServicesProvider: Send + Sync {
    /// Lists the leaderboards this provider exposes
    async fn get_leaderboards(&self) -> Result<PageData<Leaderboard>, ProviderError>;

    /// Fetches ranked scores for a leaderboard
    ///
    /// `from_start` requests the first page on providers with real paging;
    /// adapters without paging accept and ignore it.
    async fn get_scores(
        &self,
        leaderboard: &Leaderboard,
        from_start: bool,
    ) -> Result<PageData<Score>, ProviderError>;

    /// Submits a score value and resolves with an acknowledgment record
    async fn submit_score(
        &self,
        leaderboard: &Leaderboard,
        value: i64,
    ) -> Result<Score, ProviderError>;

    /// Opens the platform's native leaderboard UI, when the platform has one
    fn show_leaderboards(&self);
}

// Re-export for callers that hold the provider as a trait object
pub type DynGameServicesProvider = Box<dyn GameServicesProvider>;

/// Selects the adapter for a platform at configuration time
pub fn provider_for(provider: SocialProvider, config: FacebookConfig) -> DynGameServicesProvider {
    match provider {
        SocialProvider::Facebook => Box::new(FacebookProvider::new(config)),
    }
}
