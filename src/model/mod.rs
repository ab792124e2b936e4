pub mod fixture;
pub mod player;
pub mod response;
pub mod team;
