use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WindowedStats {
    pub user_id: String,
    pub total_questions: i64,
    pub correct_answers: i64,
    // round(correct/total x 100), computed inside the aggregation.
    pub accuracy: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RankEntry {
    #[serde(flatten)]
    pub stats: WindowedStats,
    pub rank: u32,
    pub display_name: String,
    pub is_current_user: bool,
}

// A single user's standing over the full eligible population.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedPosition {
    pub stats: WindowedStats,
    pub rank: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Ready,
    Failed,
}

#[derive(Serialize)]
pub struct AccuracyLeaderboardResponse {
    pub status: String,
    pub message: String,
    pub period: String,
    pub leaderboard: Vec<RankEntry>,
    pub my_position: Option<RankEntry>,
}
