use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::FacebookConfig;
use crate::errors::ProviderError;
use crate::models::{
    Leaderboard, PageData, Score, ScoresEnvelope, SocialProvider, SubmitEnvelope, UserIdentity,
};
use crate::provider::GameServicesProvider;
use crate::ranking::rank_scores;
use crate::transport::{AlwaysGranted, GraphTransport, HttpGraphTransport, HttpMethod, PermissionGate};

const SCORES_PATH: &str = "/app/scores?fields=score,user";
const SUBMIT_PATH: &str = "/me/scores";
const MAIN_LEADERBOARD: &str = "main";

/// Facebook Graph adapter for the game-services surface
///
/// Stateless across calls; each operation issues at most one Graph call and
/// resolves exactly once. Transport and permission checking sit behind traits
/// so tests can substitute doubles.
pub struct FacebookProvider {
    transport: Arc<dyn GraphTransport>,
    permissions: Arc<dyn PermissionGate>,
}

impl FacebookProvider {
    /// Create a provider wired to the real Graph API
    pub fn new(config: FacebookConfig) -> Self {
        Self {
            transport: Arc::new(HttpGraphTransport::new(config)),
            permissions: Arc::new(AlwaysGranted),
        }
    }

    /// Create a provider with injected transport and permission gate
    pub fn with_transport(
        transport: Arc<dyn GraphTransport>,
        permissions: Arc<dyn PermissionGate>,
    ) -> Self {
        Self {
            transport,
            permissions,
        }
    }
}

#[async_trait::async_trait]
impl GameServicesProvider for FacebookProvider {
    /// Facebook exposes a single fixed leaderboard; no network call is made.
    async fn get_leaderboards(&self) -> Result<PageData<Leaderboard>, ProviderError> {
        let leaderboard = Leaderboard {
            identifier: MAIN_LEADERBOARD.to_string(),
            provider: SocialProvider::Facebook,
        };

        Ok(PageData {
            page_data: vec![leaderboard],
            page_number: 1,
            has_more: false,
        })
    }

    async fn get_scores(
        &self,
        leaderboard: &Leaderboard,
        _from_start: bool,
    ) -> Result<PageData<Score>, ProviderError> {
        let raw = self
            .transport
            .request(SCORES_PATH, HttpMethod::Get, None)
            .await?;
        debug!("get_scores response: {}", raw);

        let envelope: ScoresEnvelope = serde_json::from_str(&raw)
            .map_err(|e| ProviderError::ResponseParse(e.to_string()))?;

        Ok(PageData {
            page_data: rank_scores(leaderboard, &envelope.data),
            page_number: 1,
            has_more: false,
        })
    }

    async fn submit_score(
        &self,
        leaderboard: &Leaderboard,
        value: i64,
    ) -> Result<Score, ProviderError> {
        // Denial short-circuits before any Graph call is issued
        self.permissions.ensure_publish().await?;

        let mut form = HashMap::new();
        form.insert("score".to_string(), value.to_string());

        let raw = self
            .transport
            .request(SUBMIT_PATH, HttpMethod::Post, Some(&form))
            .await?;
        debug!("submit_score response: {}", raw);

        let envelope: SubmitEnvelope = serde_json::from_str(&raw)
            .map_err(|e| ProviderError::ResponseParse(e.to_string()))?;

        if !envelope.success {
            return Err(ProviderError::SubmitRejected);
        }

        // The Graph response carries no standing, so the acknowledgment is a
        // synthetic record: rank 0 and the session's own identity placeholder.
        Ok(Score {
            leaderboard: leaderboard.clone(),
            user: UserIdentity {
                provider: SocialProvider::Facebook,
                username: "me".to_string(),
                profile_id: "0".to_string(),
            },
            rank: 0,
            value,
        })
    }

    fn show_leaderboards(&self) {
        error!("Can't show leaderboards from facebook");
    }
}
