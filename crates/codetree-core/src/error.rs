//! Error taxonomy for a code tree run. Every variant is fatal.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("invalid manifest {}{}: {reason}", path.display(), line.map(|l| format!(":{l}")).unwrap_or_default())]
    ManifestParse {
        path: PathBuf,
        line: Option<usize>,
        reason: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error in {}:{diagnostic}", path.display())]
    Parse { path: PathBuf, diagnostic: Diagnostic },

    #[error("cannot load grammar: {0}")]
    Grammar(String),
}

/// Coarse error category, one per failure class of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Manifest,
    Io,
    Parse,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ManifestNotFound { .. } | Error::ManifestParse { .. } => ErrorKind::Manifest,
            Error::Io { .. } => ErrorKind::Io,
            Error::Parse { .. } | Error::Grammar(_) => ErrorKind::Parse,
        }
    }
}

/// First syntax problem found in a source file. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}
