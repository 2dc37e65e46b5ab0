use std::path::{Path, PathBuf};

/// Errors produced while collecting or rendering a scenario report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
    #[error("Failed to serialize report totals: {0}")]
    Render(#[from] serde_json::Error),
}

impl ReportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
