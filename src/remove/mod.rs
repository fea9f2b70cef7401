//! Service removal subsystem.
//!
//! # Data Flow
//! ```text
//! RemovalRequest (validated by the CLI layer)
//!     → orchestrator.rs
//!         ┌ FragmentLock held ───────────────────────────┐
//!         │ filesystem.rs: delete {service}-fe.cfg       │
//!         │ filesystem.rs: delete {service}-be.cfg       │
//!         │ registry: deregister (unless service/swarm)  │
//!         └──────────────────────────────────────────────┘
//!     → proxy::ConfigAssembler::assemble
//!     → proxy::ProxyController::reload
//! ```
//!
//! # Design Decisions
//! - First failure aborts; completed steps are not rolled back
//! - The lock is injected so creation and removal can share it
//! - `service`/`swarm` modes skip only the registry step

pub mod filesystem;
pub mod lock;
pub mod orchestrator;
pub mod request;

pub use filesystem::{Filesystem, LocalFilesystem};
pub use lock::FragmentLock;
pub use orchestrator::{RemovalOrchestrator, RemoveError};
pub use request::{RemovalRequest, RequestError};
