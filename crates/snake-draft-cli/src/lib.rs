// Terminal driver for the snake draft: argument parsing, command parsing,
// rendering, and the interactive session loop. All draft logic lives in
// `snake_draft_core`.

pub mod cli;
pub mod command;
pub mod render;
pub mod session;
