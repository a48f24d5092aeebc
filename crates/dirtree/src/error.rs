use derive_more::Display;
use std::io;
use std::path::PathBuf;

/// Errors produced while rendering a tree
///
/// The underlying I/O error is reported through `source()`, not the message.
///
/// Every variant is terminal: rendering stops at the first error and lines
/// already written stay written.
#[derive(Debug, Display)]
pub enum TreeError {
    /// The root path does not exist or cannot be stat'ed
    #[display(fmt = "cannot access {}", "path.display()")]
    NotFound { path: PathBuf, source: io::Error },

    /// The root path exists but is not a directory
    #[display(fmt = "{} is not a directory", "path.display()")]
    NotADirectory { path: PathBuf },

    /// Listing a directory failed during traversal
    #[display(fmt = "failed to read directory {}", "path.display()")]
    ReadError { path: PathBuf, source: io::Error },

    /// Writing rendered lines to the output failed
    #[display(fmt = "failed to write output")]
    Output { source: io::Error },
}

impl TreeError {
    /// The path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            TreeError::NotFound { path, .. }
            | TreeError::NotADirectory { path }
            | TreeError::ReadError { path, .. } => Some(path),
            TreeError::Output { .. } => None,
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::NotFound { source, .. }
            | TreeError::ReadError { source, .. }
            | TreeError::Output { source } => Some(source),
            TreeError::NotADirectory { .. } => None,
        }
    }
}

impl From<io::Error> for TreeError {
    fn from(source: io::Error) -> Self {
        TreeError::Output { source }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
