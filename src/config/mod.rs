//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FleetConfig
//!     → CLI flags / environment override individual fields
//!     → collaborators and RemovalRequest built from the result
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::FleetConfig;
pub use schema::ObservabilityConfig;
pub use schema::PathsConfig;
pub use schema::ProxyConfig;
pub use schema::RegistryConfig;
