use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while inspecting a tree.
///
/// Only `Invocation` and `DirectoryAccess` stop a run. `PartialTraversal` is
/// collected into the scan result and `Export` is reported next to the
/// console output.
#[derive(Error, Debug)]
pub enum InspectError {
    /// Command line was missing or malformed.
    #[error("Invalid invocation: {0}")]
    Invocation(String),

    /// Root path is missing, not a directory, or unreadable.
    #[error("Cannot access directory {path}: {reason}")]
    DirectoryAccess { path: PathBuf, reason: String },

    /// A subtree could not be read mid-scan.
    #[error("Skipped unreadable path {path}: {source}")]
    PartialTraversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// CSV destination could not be opened or written.
    #[error("Failed to write CSV to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl InspectError {
    pub(crate) fn directory_access(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        InspectError::DirectoryAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_access_message_names_path() {
        let err = InspectError::directory_access("/no/such/dir", "Path does not exist");
        assert_eq!(
            err.to_string(),
            "Cannot access directory /no/such/dir: Path does not exist"
        );
    }

    #[test]
    fn invocation_message() {
        let err = InspectError::Invocation("missing directory".to_string());
        assert_eq!(err.to_string(), "Invalid invocation: missing directory");
    }
}
