pub mod leaderboard_controller;
