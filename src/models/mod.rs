//! Database models and external configuration.

pub mod client;
pub mod config;
pub mod project;
