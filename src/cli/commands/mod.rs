pub mod config;
pub mod title;
