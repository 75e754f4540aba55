use crate::error::NormalizeError;
use std::fs;
use std::io;
use std::path::Path;

pub struct FileRenamer;

impl FileRenamer {
    /// Renames `source` to `destination`, refusing to replace anything.
    pub fn rename(source: &Path, destination: &Path) -> Result<(), NormalizeError> {
        // fs::rename silently replaces files on Unix. On a case-insensitive
        // filesystem `1.JPG -> 1.jpg` finds the source itself here.
        if fs::symlink_metadata(destination).is_ok() && !is_same_file(source, destination) {
            return Err(NormalizeError::AlreadyExists {
                path: destination.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "destination appeared after the directory was read",
                ),
            });
        }

        log::debug!("Renaming {:?} -> {:?}", source, destination);

        fs::rename(source, destination).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => NormalizeError::from_io(destination, e),
            _ => NormalizeError::from_io(source, e),
        })
    }

    /// Deletes an empty directory.
    pub fn prune(dir: &Path) -> Result<(), NormalizeError> {
        log::warn!("{:?} is empty! Deleting...", dir);
        fs::remove_dir(dir).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => NormalizeError::from_io(dir, e),
            _ => NormalizeError::Unknown {
                path: dir.to_path_buf(),
                source: e,
            },
        })
    }
}

#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
