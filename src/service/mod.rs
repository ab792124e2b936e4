pub mod error;
pub mod fixture;
pub mod player;
pub mod standings;
pub mod team;
