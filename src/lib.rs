//! Reverse-proxy fleet management library.

pub mod cli;
pub mod config;
pub mod observability;
pub mod proxy;
pub mod registry;
pub mod remove;

pub use config::FleetConfig;
pub use remove::{RemovalOrchestrator, RemovalRequest, RemoveError};
