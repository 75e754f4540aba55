use crate::error::NormalizeError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Number of digits needed to print `count`, so every ordinal in a directory
/// of `count` files has the same width.
pub fn padding_width(count: usize) -> usize {
    count.max(1).to_string().len()
}

/// Destination for `source` as the `ordinal`-th file: the zero-padded number
/// plus the source extension lowercased, in the same directory.
pub fn destination(source: &Path, ordinal: usize, width: usize) -> Result<PathBuf, NormalizeError> {
    let extension = source
        .file_name()
        .and_then(lowercase_extension)
        .ok_or_else(|| NormalizeError::InvalidInput {
            path: source.to_path_buf(),
        })?;

    let mut new_name = OsString::from(format!("{:0width$}.", ordinal, width = width));
    new_name.push(extension);

    Ok(match source.parent() {
        Some(parent) => parent.join(new_name),
        None => PathBuf::from(new_name),
    })
}

/// Everything after the last `.` in `name`, lowercased. Bytes that are not
/// valid UTF-8 are kept as they are.
#[cfg(unix)]
fn lowercase_extension(name: &OsStr) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let dot = bytes.iter().rposition(|b| *b == b'.')?;
    let extension = &bytes[dot + 1..];

    Some(match std::str::from_utf8(extension) {
        Ok(text) => OsString::from(text.to_lowercase()),
        Err(_) => OsString::from_vec(extension.to_ascii_lowercase()),
    })
}

#[cfg(not(unix))]
fn lowercase_extension(name: &OsStr) -> Option<OsString> {
    let name = name.to_string_lossy();
    let (_, extension) = name.rsplit_once('.')?;
    Some(OsString::from(extension.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_width() {
        assert_eq!(padding_width(0), 1);
        assert_eq!(padding_width(3), 1);
        assert_eq!(padding_width(9), 1);
        assert_eq!(padding_width(12), 2);
        assert_eq!(padding_width(100), 3);
    }

    #[test]
    fn test_destination_pads_and_lowercases() -> Result<(), NormalizeError> {
        let source = Path::new("/photos/trip/PHOTO.JPG");

        assert_eq!(destination(source, 3, 1)?, PathBuf::from("/photos/trip/3.jpg"));
        assert_eq!(destination(source, 3, 2)?, PathBuf::from("/photos/trip/03.jpg"));
        Ok(())
    }

    #[test]
    fn test_destination_keeps_only_last_extension() -> Result<(), NormalizeError> {
        let source = Path::new("/photos/v1.2/clip.final.MP4");

        // Dots in the directory name do not count
        assert_eq!(destination(source, 12, 2)?, PathBuf::from("/photos/v1.2/12.mp4"));
        Ok(())
    }

    #[test]
    fn test_missing_extension_is_invalid_input() {
        let source = Path::new("/photos.d/IMG_0001");

        match destination(source, 1, 1) {
            Err(NormalizeError::InvalidInput { path }) => assert_eq!(path, source),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_extension_is_kept_byte_for_byte() -> Result<(), NormalizeError> {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let name = OsStr::from_bytes(b"shot.P\xffNG");
        let source = Path::new("/photos").join(name);

        let target = destination(&source, 1, 1)?;

        assert_eq!(target.parent(), Some(Path::new("/photos")));
        let file_name = target.file_name().map(|n| n.to_os_string().into_vec());
        assert_eq!(file_name, Some(b"1.p\xffng".to_vec()));
        Ok(())
    }
}
