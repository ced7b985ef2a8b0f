use crate::constants::STREAK_DISPLAY_CAP;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Maintained by the activity tracker (including its one-day grace rule);
// this engine only reads it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StreakCounter {
    pub user_id: String,
    pub current_streak: i64,
    pub longest_streak: i64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub last_activity_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StreakEntry {
    pub user_id: String,
    pub current_streak: i64,
    pub displayed_streak: String,
    pub rank: u32,
    pub display_name: String,
    pub is_current_user: bool,
}

// Display cap only; stored values and sort order stay uncapped.
pub fn displayed_streak(current_streak: i64) -> String {
    if current_streak > STREAK_DISPLAY_CAP {
        format!("{}+", STREAK_DISPLAY_CAP)
    } else {
        current_streak.to_string()
    }
}

#[derive(Serialize)]
pub struct StreakLeaderboardResponse {
    pub status: String,
    pub message: String,
    pub leaderboard: Vec<StreakEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_displayed_value_above_thirty() {
        assert_eq!(displayed_streak(45), "30+");
        assert_eq!(displayed_streak(31), "30+");
    }

    #[test]
    fn values_at_or_below_cap_display_verbatim() {
        assert_eq!(displayed_streak(30), "30");
        assert_eq!(displayed_streak(2), "2");
    }
}
