/// Social Game-Services Library
///
/// This library adapts a game-services social surface (leaderboards, scores,
/// score submission) onto the Facebook Graph API and reshapes the Graph JSON
/// responses into the host application's own data model.
///
/// It handles:
/// - Leaderboard listing (this provider exposes a single "main" leaderboard)
/// - Score fetching with rank computation over the raw Graph score feed
/// - Permission-gated score submission with a synthetic acknowledgment record
/// - Transport and permission seams as traits, so the Graph call and the
///   publish-permission check can be mocked in tests

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod provider;
pub mod ranking;
pub mod transport;

pub use client::FacebookProvider;
pub use config::FacebookConfig;
pub use errors::ProviderError;
pub use models::{Leaderboard, PageData, Score, SocialProvider, UserIdentity};
pub use provider::{provider_for, DynGameServicesProvider, GameServicesProvider};
pub use transport::{AlwaysGranted, GraphTransport, HttpGraphTransport, HttpMethod, PermissionGate};
