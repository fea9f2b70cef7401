//! Proxy configuration subsystem.
//!
//! # Data Flow
//! ```text
//! templates dir
//!     ├── haproxy.tmpl           (base template)
//!     ├── {service}-fe.cfg       (frontend fragments, fragment.rs)
//!     └── {service}-be.cfg       (backend fragments)
//!         → assembler.rs (concatenate into configs dir)
//!         → reload.rs (proxy adopts the new file)
//! ```
//!
//! # Design Decisions
//! - Assembly and reload sit behind traits so removal can be tested
//!   without a proxy binary
//! - Assembled config is written to a temp file and renamed into place

pub mod assembler;
pub mod fragment;
pub mod reload;

use std::path::Path;

use async_trait::async_trait;

pub use assembler::{AssemblyError, TemplateAssembler};
pub use fragment::FragmentKind;
pub use reload::{CommandReloader, ReloadError};

/// Rebuilds the consolidated proxy configuration from fragment templates.
#[async_trait]
pub trait ConfigAssembler: Send + Sync {
    async fn assemble(&self, templates_path: &Path, configs_path: &Path)
        -> Result<(), AssemblyError>;
}

/// Makes the running proxy pick up the assembled configuration.
#[async_trait]
pub trait ProxyController: Send + Sync {
    async fn reload(&self) -> Result<(), ReloadError>;
}
