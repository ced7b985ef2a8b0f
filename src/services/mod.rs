pub mod display_name_service;
pub mod leaderboard_service;
pub mod time_window;
pub mod view_session;
