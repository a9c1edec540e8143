use crate::{Error, Result};

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// How [`write_file`] treats a path that already exists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Leave existing files untouched
    #[default]
    SkipExisting,

    /// Replace existing files
    Overwrite,
}

/// What [`write_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was created
    Written,

    /// The file existed and was replaced
    Overwritten,

    /// The file existed and was left as is
    Skipped,
}

impl WriteOutcome {
    pub fn is_skipped(self) -> bool {
        matches!(self, WriteOutcome::Skipped)
    }
}

/// Recursively create `dir` and any missing parents. Succeeds if it already
/// exists.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(Error::io("create directory", dir))
}

/// Write `contents` to `path`.
///
/// In [`WriteMode::SkipExisting`] an existing entry at `path` is never
/// touched and no error is raised. The existence check and the create are a
/// single `create_new` open, so a concurrent writer cannot be clobbered.
pub fn write_file(path: impl AsRef<Path>, contents: &str, mode: WriteMode) -> Result<WriteOutcome> {
    let path = path.as_ref();

    match mode {
        WriteMode::SkipExisting => {
            let file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path);

            match file {
                Ok(mut file) => {
                    file.write_all(contents.as_bytes())
                        .map_err(Error::io("write", path))?;
                    Ok(WriteOutcome::Written)
                }
                // Directories and other entries count as existing too
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(WriteOutcome::Skipped),
                Err(err) => Err(Error::io("write", path)(err)),
            }
        }
        WriteMode::Overwrite => {
            let existed = fs::exists(path).map_err(Error::io("inspect", path))?;
            fs::write(path, contents).map_err(Error::io("write", path))?;

            Ok(if existed {
                WriteOutcome::Overwritten
            } else {
                WriteOutcome::Written
            })
        }
    }
}
