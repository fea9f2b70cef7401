//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! orchestrator and collaborators emit:
//!     → tracing events with structured fields (service, path, status)
//!     → logging.rs subscriber (stderr, text or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - `RUST_LOG` overrides the configured level

pub mod logging;
