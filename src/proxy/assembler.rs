//! Consolidated configuration assembly.
//!
//! # Responsibilities
//! - Read the base template and every service fragment
//! - Write the consolidated config: base, frontends, backends
//! - Replace the previous file atomically

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;

use crate::config::ProxyConfig;
use crate::proxy::{ConfigAssembler, FragmentKind};

/// Errors raised while rebuilding the consolidated configuration.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The base template does not exist.
    #[error("base template {} not found", .0.display())]
    MissingTemplate(PathBuf),

    /// Reading a template/fragment or writing the output failed.
    #[error("could not access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> AssemblyError + '_ {
    move |source| AssemblyError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Builds the proxy config by concatenating the base template and fragments.
#[derive(Debug, Clone)]
pub struct TemplateAssembler {
    base_template: String,
    config_file: String,
}

impl TemplateAssembler {
    pub fn new(base_template: impl Into<String>, config_file: impl Into<String>) -> Self {
        Self {
            base_template: base_template.into(),
            config_file: config_file.into(),
        }
    }

    pub fn from_config(config: &ProxyConfig) -> Self {
        Self::new(config.base_template.clone(), config.config_file.clone())
    }

    /// Fragment paths in the templates directory, frontends and backends
    /// each sorted by file name.
    async fn collect_fragments(
        &self,
        templates_path: &Path,
    ) -> Result<(Vec<PathBuf>, Vec<PathBuf>), AssemblyError> {
        let mut frontends = Vec::new();
        let mut backends = Vec::new();

        let mut entries = fs::read_dir(templates_path)
            .await
            .map_err(io_error(templates_path))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(io_error(templates_path))?
        {
            let name = entry.file_name();
            match FragmentKind::of_file_name(&name.to_string_lossy()) {
                Some(FragmentKind::Frontend) => frontends.push(entry.path()),
                Some(FragmentKind::Backend) => backends.push(entry.path()),
                None => {}
            }
        }

        frontends.sort();
        backends.sort();
        Ok((frontends, backends))
    }
}

#[async_trait]
impl ConfigAssembler for TemplateAssembler {
    async fn assemble(
        &self,
        templates_path: &Path,
        configs_path: &Path,
    ) -> Result<(), AssemblyError> {
        let base_path = templates_path.join(&self.base_template);
        let base = match fs::read_to_string(&base_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AssemblyError::MissingTemplate(base_path));
            }
            Err(e) => return Err(io_error(&base_path)(e)),
        };

        let (frontends, backends) = self.collect_fragments(templates_path).await?;

        let mut sections = vec![base.trim_end().to_string()];
        for path in frontends.iter().chain(backends.iter()) {
            let content = fs::read_to_string(path).await.map_err(io_error(path))?;
            if !content.trim().is_empty() {
                sections.push(content.trim_end().to_string());
            }
        }
        let mut output = sections.join("\n\n");
        output.push('\n');

        let target = configs_path.join(&self.config_file);
        let staging = configs_path.join(format!("{}.tmp", self.config_file));
        fs::write(&staging, output).await.map_err(io_error(&staging))?;
        fs::rename(&staging, &target).await.map_err(io_error(&target))?;

        tracing::info!(
            path = %target.display(),
            frontends = frontends.len(),
            backends = backends.len(),
            "Proxy configuration assembled"
        );
        Ok(())
    }
}
