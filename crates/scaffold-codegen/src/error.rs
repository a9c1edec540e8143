use crate::ParseError;
use std::io;
use std::path::PathBuf;

/// An error that can occur while generating a feature module.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No feature name was supplied. Raised before anything touches the
    /// filesystem.
    #[error("missing feature name")]
    MissingFeatureName,

    /// The name does not yield valid Rust identifiers. Raised before
    /// anything touches the filesystem.
    #[error("invalid feature name `{name}`: {reason}")]
    InvalidFeatureName { name: String, reason: &'static str },

    /// A different feature already registered the same module or type name.
    #[error("cannot register `{type_name}` from `{path}`: already declared from `{existing}`")]
    NameCollision {
        type_name: String,
        path: String,
        existing: String,
    },

    /// The source directory cannot be expressed as a path relative to the
    /// composition root's directory.
    #[error(
        "composition root `{}` cannot reach source directory `{}`",
        root.display(),
        source_dir.display()
    )]
    UnreachableSourceDir { root: PathBuf, source_dir: PathBuf },

    #[error("failed to {op} `{}`", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed composition root `{}`", path.display())]
    MalformedCompositionRoot {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl Error {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { op, path, source }
    }

    pub fn is_missing_feature_name(&self) -> bool {
        matches!(self, Error::MissingFeatureName)
    }
}
