use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("{path:?} does not contain an extension")]
    InvalidInput { path: PathBuf },

    #[error("permission denied for {path:?}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} already exists")]
    AlreadyExists {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown error on {path:?}")]
    Unknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NormalizeError {
    /// Maps an OS error onto the variant matching its kind, tagged with `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path, source },
            _ => Self::Unknown { path, source },
        }
    }

    /// The path the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidInput { path }
            | Self::PermissionDenied { path, .. }
            | Self::AlreadyExists { path, .. }
            | Self::Unknown { path, .. } => path,
        }
    }
}
