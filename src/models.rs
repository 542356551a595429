use serde::{Deserialize, Serialize};

/// Social platform a provider adapter talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialProvider {
    Facebook,
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialProvider::Facebook => write!(f, "FACEBOOK"),
        }
    }
}

/// Identity of a scorer on a social platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub provider: SocialProvider,
    pub username: String,
    pub profile_id: String,
}

/// Named ranking context scores belong to; owns no scores itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub identifier: String,
    pub provider: SocialProvider,
}

/// One ranked submission record tied to a leaderboard and a user identity
///
/// `rank` is the 1-based ordinal assigned by the ranking pass; submission
/// acknowledgments carry rank 0 because the remote response does not include
/// the real standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub leaderboard: Leaderboard,
    pub user: UserIdentity,
    pub rank: u32,
    pub value: i64,
}

/// A batch of results plus pagination state, uniform across providers even
/// when a given provider does no real paging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData<T> {
    pub page_data: Vec<T>,
    pub page_number: u32,
    pub has_more: bool,
}

/// Graph score feed envelope (`GET /app/scores?fields=score,user`)
#[derive(Debug, Deserialize)]
pub struct ScoresEnvelope {
    pub data: Vec<RawScoreEntry>,
}

/// One raw record from the Graph score feed
///
/// `score` may be absent; such entries produce no output. `user` is always
/// present on the real wire, so its absence fails the envelope parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScoreEntry {
    pub score: Option<f64>,
    pub user: RawScoreUser,
}

/// Scorer fields carried on each raw entry, only name and profile ID
#[derive(Debug, Clone, Deserialize)]
pub struct RawScoreUser {
    pub name: String,
    pub id: String,
}

/// Graph submit response (`POST /me/scores`)
#[derive(Debug, Deserialize)]
pub struct SubmitEnvelope {
    pub success: bool,
}
