mod composition;
pub use composition::{
    patch_composition_root, CompositionRoot, FeatureImport, ParseError, Registration,
};

mod error;
pub use error::Error;

mod generate;
pub use generate::{Generator, Report, DEFAULT_COMPOSITION_ROOT};

mod name;
pub use name::FeatureName;

pub mod template;
pub use template::{Artifact, ArtifactKind};

mod write;
pub use write::{ensure_dir, write_file, WriteMode, WriteOutcome};

/// A Result type alias that uses the generator's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
