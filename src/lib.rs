pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;
pub mod version;

pub use error::{PublishError, Result};
