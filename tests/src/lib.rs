//! Shared fixtures for the end-to-end suites.

pub use std_util::*;

use scaffold_codegen::{Generator, Report};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Generator output for `candidate`, checked in so the generated code is
/// compiled and exercised by `generated_candidate.rs`.
pub mod fixtures {
    pub const APP_MODULE: &str = include_str!("../fixtures/app.module.rs");

    pub const CANDIDATE: [(&str, &str); 5] = [
        (
            "candidate.entity.rs",
            include_str!("../fixtures/candidate/candidate.entity.rs"),
        ),
        (
            "candidate.repository.rs",
            include_str!("../fixtures/candidate/candidate.repository.rs"),
        ),
        (
            "candidate.service.rs",
            include_str!("../fixtures/candidate/candidate.service.rs"),
        ),
        (
            "candidate.controller.rs",
            include_str!("../fixtures/candidate/candidate.controller.rs"),
        ),
        (
            "candidate.module.rs",
            include_str!("../fixtures/candidate/candidate.module.rs"),
        ),
    ];
}

/// A throwaway host project with an initialized composition root.
pub struct HostProject {
    // Removed on drop
    _dir: TempDir,
    src: PathBuf,
    generator: Generator,
}

impl HostProject {
    pub fn new() -> HostProject {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let generator = Generator::new(&src);
        generator.init().unwrap();

        HostProject {
            _dir: dir,
            src,
            generator,
        }
    }

    pub fn generate(&self, name: &str) -> Report {
        self.generator.generate(name).unwrap()
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    /// Contents of a file relative to the source directory
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(self.src.join(path)).unwrap()
    }

    pub fn composition_root(&self) -> String {
        self.read(scaffold_codegen::DEFAULT_COMPOSITION_ROOT)
    }

    /// Sorted file names in a directory relative to the source directory
    pub fn files_in(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let mut files: Vec<_> = fs::read_dir(self.src.join(dir))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        files
    }
}

impl Default for HostProject {
    fn default() -> Self {
        Self::new()
    }
}
