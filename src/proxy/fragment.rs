//! Per-service configuration fragments.

use std::path::{Path, PathBuf};

/// The two fragment files every service contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Frontend,
    Backend,
}

impl FragmentKind {
    /// Frontend first; removal and assembly both rely on this order.
    pub const ALL: [FragmentKind; 2] = [FragmentKind::Frontend, FragmentKind::Backend];

    pub fn suffix(self) -> &'static str {
        match self {
            FragmentKind::Frontend => "-fe.cfg",
            FragmentKind::Backend => "-be.cfg",
        }
    }

    /// `{templates_path}/{service_name}{suffix}`.
    pub fn path_for(self, templates_path: &Path, service_name: &str) -> PathBuf {
        templates_path.join(format!("{}{}", service_name, self.suffix()))
    }

    /// Classify a file name found in the templates directory.
    pub fn of_file_name(name: &str) -> Option<FragmentKind> {
        Self::ALL
            .into_iter()
            .find(|kind| name.len() > kind.suffix().len() && name.ends_with(kind.suffix()))
    }
}

/// Fragment paths for a service, frontend then backend.
pub fn fragment_paths(templates_path: &Path, service_name: &str) -> [PathBuf; 2] {
    FragmentKind::ALL.map(|kind| kind.path_for(templates_path, service_name))
}
