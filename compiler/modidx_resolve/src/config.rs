//! Resolution settings.

/// Settings for one resolution run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory name that anchors the project-relative path extracted from
    /// `file` nodes (see [`derive_project_path`](crate::derive_project_path)).
    pub project_root: String,
}

impl IndexConfig {
    /// Default project root marker.
    pub const DEFAULT_PROJECT_ROOT: &'static str = "delphi";

    #[must_use]
    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_root = root.into();
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            project_root: Self::DEFAULT_PROJECT_ROOT.to_string(),
        }
    }
}
