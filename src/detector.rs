use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Media(MediaKind),
    /// Regular file that is neither image nor video
    File,
    /// Symlinks, sockets, and anything we could not stat
    Other,
}

pub struct FileDetector;

impl FileDetector {
    /// Classify a directory entry. Symlinks are never followed.
    pub fn classify(path: &Path) -> EntryKind {
        let file_type = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata.file_type(),
            Err(e) => {
                log::warn!("Could not stat {:?}, leaving it alone: {}", path, e);
                return EntryKind::Other;
            }
        };

        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            match Self::detect_media(path) {
                Some(kind) => EntryKind::Media(kind),
                None => EntryKind::File,
            }
        } else {
            EntryKind::Other
        }
    }

    pub fn detect_media(path: &Path) -> Option<MediaKind> {
        // Magic bytes win when they are recognised
        match infer::get_from_path(path) {
            Ok(Some(kind)) => {
                let media = match kind.matcher_type() {
                    infer::MatcherType::Image => Some(MediaKind::Image),
                    infer::MatcherType::Video => Some(MediaKind::Video),
                    _ => None,
                };
                log::debug!("MIME {} | {:?} -> {:?}", kind.mime_type(), path, media);
                return media;
            }
            Ok(None) => {}
            Err(e) => {
                log::debug!("Could not read {:?} for sniffing: {}", path, e);
            }
        }

        Self::detect_by_extension(path)
    }

    fn detect_by_extension(path: &Path) -> Option<MediaKind> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "ico" | "tiff" | "tif"
            | "heic" | "heif" | "avif" => Some(MediaKind::Image),

            "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg"
            | "3gp" => Some(MediaKind::Video),

            _ => None,
        }
    }
}
