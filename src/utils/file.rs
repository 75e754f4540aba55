//! A collection of utility functions for file operations.

use std::borrow::Cow;
use std::path::Path;

/// Final path component as text, empty when the path has none.
pub fn file_name_lossy(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}

/// File name without its last extension.
pub fn stem_lossy(path: &Path) -> Cow<'_, str> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}
