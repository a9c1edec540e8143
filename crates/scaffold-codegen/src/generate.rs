use crate::template::{self, escape, Artifact};
use crate::{
    ensure_dir, patch_composition_root, write_file, CompositionRoot, Error, FeatureImport,
    FeatureName, Registration, Result, WriteMode, WriteOutcome,
};

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// File name of the composition root, relative to the source directory.
pub const DEFAULT_COMPOSITION_ROOT: &str = "app.module.rs";

/// Generates feature modules into a host project's source directory.
#[derive(Debug, Clone)]
pub struct Generator {
    source_dir: PathBuf,
    composition_root: PathBuf,
    mode: WriteMode,
}

/// Result of one [`Generator::generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub feature: FeatureName,

    /// Directory the artifacts were written to
    pub dir: PathBuf,

    /// Path of each artifact and what happened to it, in generation order
    pub artifacts: Vec<(PathBuf, WriteOutcome)>,

    pub registration: Registration,
}

impl Generator {
    pub fn new(source_dir: impl Into<PathBuf>) -> Generator {
        Generator {
            source_dir: source_dir.into(),
            composition_root: PathBuf::from(DEFAULT_COMPOSITION_ROOT),
            mode: WriteMode::SkipExisting,
        }
    }

    /// Set the composition root path. Relative paths are resolved against
    /// the source directory.
    pub fn composition_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.composition_root = path.into();
        self
    }

    /// Overwrite artifacts that already exist instead of skipping them.
    pub fn force(mut self, force: bool) -> Self {
        self.mode = if force {
            WriteMode::Overwrite
        } else {
            WriteMode::SkipExisting
        };
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn composition_root_path(&self) -> PathBuf {
        self.source_dir.join(&self.composition_root)
    }

    /// Generate the feature named `raw` and register it.
    ///
    /// The name, the import path and the registry entry are validated before
    /// anything is written. Any later failure leaves already written
    /// artifacts in place.
    pub fn generate(&self, raw: &str) -> Result<Report> {
        let feature = FeatureName::parse(raw)?;
        let import = self.feature_import(&feature)?;
        self.check_collision(&import)?;

        let dir = self.source_dir.join(feature.normalized());

        ensure_dir(&dir)?;

        let mut artifacts = vec![];

        for Artifact {
            kind,
            relative_path,
            contents,
        } in template::render_all(&feature)
        {
            let path = self.source_dir.join(relative_path);
            let outcome = write_file(&path, &contents, self.mode)?;
            debug!(kind = kind.infix(), path = %path.display(), ?outcome, "artifact");

            artifacts.push((path, outcome));
        }

        let registration = patch_composition_root(self.composition_root_path(), import)?;

        Ok(Report {
            feature,
            dir,
            artifacts,
            registration,
        })
    }

    /// The feature's import, with its `#[path]` made relative to the
    /// directory holding the composition root.
    fn feature_import(&self, feature: &FeatureName) -> Result<FeatureImport> {
        let mut import = FeatureImport::for_feature(feature);

        let root = self.composition_root_path();
        let root_dir = root.parent().unwrap_or(Path::new(""));

        let Some(prefix) = relative_path(root_dir, &self.source_dir) else {
            return Err(Error::UnreachableSourceDir {
                root,
                source_dir: self.source_dir.clone(),
            });
        };

        if !prefix.is_empty() {
            import.path = format!("{}/{}", prefix.join("/"), import.path);
        }

        Ok(import)
    }

    /// Fails when the composition root already declares the feature's module
    /// or type from another path. A missing or malformed root is reported by
    /// the registration step instead.
    fn check_collision(&self, import: &FeatureImport) -> Result<()> {
        let Ok(src) = fs::read_to_string(self.composition_root_path()) else {
            return Ok(());
        };
        let Ok(root) = src.parse::<CompositionRoot>() else {
            return Ok(());
        };

        match root.conflicting(import) {
            Some(existing) => Err(Error::NameCollision {
                type_name: import.type_name.clone(),
                path: import.path.clone(),
                existing: existing.path.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Write an empty composition root unless one already exists.
    pub fn init(&self) -> Result<WriteOutcome> {
        let path = self.composition_root_path();

        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        write_file(&path, template::composition_root(), WriteMode::SkipExisting)
    }
}

/// Lexically resolve `.` and `..`.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = vec![];

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if matches!(out.last(), Some(Component::Normal(_))) => {
                out.pop();
            }
            // `..` of the filesystem root is the root
            Component::ParentDir if matches!(out.last(), Some(Component::RootDir)) => {}
            other => out.push(other),
        }
    }

    out
}

/// The `/` separated path from directory `from` to directory `to`, each
/// segment escaped for a string literal. `None` if `from` climbs out of a
/// prefix it does not share with `to`.
fn relative_path(from: &Path, to: &Path) -> Option<Vec<String>> {
    let from = normalize(from);
    let to = normalize(to);
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut segments = vec![];

    for component in &from[common..] {
        match component {
            Component::Normal(_) => segments.push("..".to_string()),
            _ => return None,
        }
    }

    for component in &to[common..] {
        match component {
            Component::Normal(part) => segments.push(escape(&part.to_string_lossy())),
            Component::ParentDir => segments.push("..".to_string()),
            _ => return None,
        }
    }

    Some(segments)
}

impl Report {
    /// Paths of the artifacts created or replaced by this run.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.artifacts
            .iter()
            .filter(|(_, outcome)| !outcome.is_skipped())
            .map(|(path, _)| path.as_path())
    }

    /// `true` if the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.written().next().is_none() && !self.registration.is_changed()
    }
}
