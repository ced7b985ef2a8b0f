pub mod leaderboard_routes;
