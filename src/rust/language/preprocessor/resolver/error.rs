use std::io;

/// Why an include resolution failed. Every variant names the file at fault.
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
    /// The active loader could not produce the file.
    #[error("failed to load '{file}': {source}")]
    Unreadable {
        file: String,
        #[source]
        source: io::Error,
    },

    /// Includes nested deeper than the configured limit.
    #[error("include depth limit of {limit} exceeded at '{file}'")]
    DepthExceeded { file: String, limit: usize },
}

impl IncludeError {
    /// The identifier of the file that caused the failure.
    pub fn failed_file(&self) -> &str {
        match self {
            IncludeError::Unreadable { file, .. } => file,
            IncludeError::DepthExceeded { file, .. } => file,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, IncludeError::Unreadable { .. })
    }
}
