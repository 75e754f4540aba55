use crate::detector::{EntryKind, FileDetector};
use crate::error::NormalizeError;
use crate::namer;
use crate::renamer::FileRenamer;
use crate::sequencer;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Tallies for one run over a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub directories_visited: usize,
    pub files_renamed: usize,
    pub files_in_place: usize,
    pub collisions_skipped: usize,
    pub directories_removed: usize,
}

/// Entries of one directory as they were when it was read. Renames made
/// while walking it do not update `names`.
struct DirectoryBatch {
    paths: Vec<PathBuf>,
    names: HashSet<OsString>,
}

impl DirectoryBatch {
    fn read(dir: &Path) -> Result<Self, NormalizeError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| NormalizeError::from_io(dir, e))? {
            let entry = entry.map_err(|e| NormalizeError::from_io(dir, e))?;
            paths.push(entry.path());
        }
        paths.sort();

        let names = paths
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
            .collect();

        Ok(Self { paths, names })
    }

    fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn contains(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.names.contains(name))
            .unwrap_or(false)
    }
}

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes every directory under `root`, `root` included.
    pub fn run(&self, root: &Path) -> Result<NormalizeReport, NormalizeError> {
        let mut report = NormalizeReport::default();
        self.normalize_dir(root, &mut report)?;
        Ok(report)
    }

    fn normalize_dir(&self, dir: &Path, report: &mut NormalizeReport) -> Result<(), NormalizeError> {
        log::info!("Entering {:?}", dir);
        report.directories_visited += 1;

        let batch = DirectoryBatch::read(dir)?;
        if batch.is_empty() {
            FileRenamer::prune(dir)?;
            report.directories_removed += 1;
            return Ok(());
        }

        let mut subdirectories = Vec::new();
        let mut media = Vec::new();
        for path in &batch.paths {
            match FileDetector::classify(path) {
                EntryKind::Directory => subdirectories.push(path.clone()),
                EntryKind::Media(kind) => {
                    log::debug!("{:?} is {:?}", path, kind);
                    media.push(path.clone());
                }
                EntryKind::File | EntryKind::Other => {
                    log::debug!("Not media, leaving alone: {:?}", path);
                }
            }
        }

        self.rename_media(media, &batch, report)?;

        if subdirectories.is_empty() {
            return Ok(());
        }

        for subdirectory in &subdirectories {
            self.normalize_dir(subdirectory, report)?;
        }

        // Children that were pruned may have left this directory empty
        if DirectoryBatch::read(dir)?.is_empty() {
            FileRenamer::prune(dir)?;
            report.directories_removed += 1;
        }

        Ok(())
    }

    fn rename_media(
        &self,
        media: Vec<PathBuf>,
        batch: &DirectoryBatch,
        report: &mut NormalizeReport,
    ) -> Result<(), NormalizeError> {
        let width = namer::padding_width(media.len());

        for (index, source) in sequencer::order_media(media).into_iter().enumerate() {
            let destination = namer::destination(&source, index + 1, width)?;

            if destination == source {
                report.files_in_place += 1;
                continue;
            }

            if batch.contains(&destination) {
                log::info!(
                    "{:?} already exists, skipping {:?}",
                    destination,
                    source
                );
                report.collisions_skipped += 1;
                continue;
            }

            FileRenamer::rename(&source, &destination)?;
            report.files_renamed += 1;
        }

        Ok(())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
