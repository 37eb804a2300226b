pub mod bots;
pub mod config;
pub mod replay;
pub mod runner;
pub mod util;
