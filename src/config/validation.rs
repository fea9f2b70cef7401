//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0)
//! - Reject empty paths and commands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FleetConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::FleetConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &FleetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let required = [
        ("paths.configs_path", &config.paths.configs_path),
        ("paths.templates_path", &config.paths.templates_path),
        ("registry.instance_name", &config.registry.instance_name),
        ("proxy.binary", &config.proxy.binary),
        ("proxy.config_file", &config.proxy.config_file),
        ("proxy.base_template", &config.proxy.base_template),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::Empty(name));
        }
    }

    if config.registry.timeout_secs == 0 {
        errors.push(ValidationError::Zero("registry.timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
