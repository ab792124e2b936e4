pub mod leaderboard;
pub mod schedule;
pub mod summary;
