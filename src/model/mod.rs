pub mod api;
pub mod discord;
pub mod leaderboard;
pub mod token;
