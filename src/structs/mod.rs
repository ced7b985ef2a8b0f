pub mod leaderboard_query;
