use anyhow::{Context, Result};
use std::path::PathBuf;

const USAGE: &str = "Usage: medianorm <DIRECTORY>";

/// Run settings. There is no config file; everything comes from the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
}

impl Config {
    /// Build the config from the process arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let root = args.next().map(PathBuf::from).context(USAGE)?;

        if let Some(extra) = args.next() {
            anyhow::bail!("Unexpected argument {:?}\n{}", extra, USAGE);
        }

        if !root.exists() {
            anyhow::bail!("Target directory does not exist: {:?}", root);
        }
        if !root.is_dir() {
            anyhow::bail!("Target is not a directory: {:?}", root);
        }

        Ok(Self { root })
    }
}
