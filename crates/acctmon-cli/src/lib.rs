pub mod args;
pub mod commands;
pub mod handlers;
pub mod types;
pub mod views;

pub use args::Cli;
pub use commands::run;
