pub const DB_NAME: &str = "studyrank";

pub const ATTEMPTS_COLL_NAME: &str = "question_attempts";
pub const STREAKS_COLL_NAME: &str = "study_streaks";
pub const DISPLAY_NAMES_COLL_NAME: &str = "display_names";
pub const ACCOUNTS_COLL_NAME: &str = "accounts";

// A user needs at least this many graded questions inside a window to be ranked.
pub const MIN_RANKED_QUESTIONS: i64 = 5;
pub const ACCURACY_RANKING_LIMIT: i64 = 100;

// Streaks below two days are not worth a leaderboard row.
pub const MIN_RANKED_STREAK: i64 = 2;
pub const STREAK_RANKING_LIMIT: i64 = 20;
// Displayed cap only; stored streaks and sort order stay uncapped.
pub const STREAK_DISPLAY_CAP: i64 = 30;

pub const SELF_FALLBACK_LABEL: &str = "You";
pub const ANONYMOUS_LABEL: &str = "Anonymous user";
