// Library root: the snake draft engine plus the configuration, player list,
// and export helpers shared by every driver.

pub mod config;
pub mod draft;
pub mod export;
pub mod players;
