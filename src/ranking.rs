use crate::models::{Leaderboard, RawScoreEntry, Score, UserIdentity};

/// Converts the raw Graph score feed into ranked `Score` records.
///
/// Entries arrive in whatever order the feed returned them; this pass does
/// not sort. Entries carrying no `score` field are dropped and do not advance
/// the rank. The sentinel `previous_score` is intentionally never reassigned
/// from observed values, so every value above -1 advances the working rank;
/// existing consumers depend on these exact rank sequences.
pub fn rank_scores(leaderboard: &Leaderboard, entries: &[RawScoreEntry]) -> Vec<Score> {
    let mut scores = Vec::with_capacity(entries.len());
    let previous_score: i64 = -1;
    let mut rank: u32 = 1;

    for entry in entries {
        let Some(raw_value) = entry.score else {
            continue;
        };
        let value = raw_value as i64;

        scores.push(Score {
            leaderboard: leaderboard.clone(),
            user: UserIdentity {
                provider: leaderboard.provider,
                username: entry.user.name.clone(),
                profile_id: entry.user.id.clone(),
            },
            rank,
            value,
        });

        if value > previous_score {
            rank += 1;
        }
    }

    scores
}
