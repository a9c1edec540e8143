//! Source templates for the five artifacts of a feature module.
//!
//! Templates are static text with two placeholders: `{{TypeName}}` and
//! `{{name}}` (the normalized feature name, escaped for use inside string
//! literals). There is no conditional or looping logic.

use crate::FeatureName;

use std::path::PathBuf;

const ENTITY: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/entity.rs"));
const REPOSITORY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/repository.rs"
));
const SERVICE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/service.rs"));
const CONTROLLER: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/controller.rs"
));
const MODULE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/module.rs"));
const COMPOSITION_ROOT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/composition_root.rs"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Entity,
    Repository,
    Service,
    Controller,
    Module,
}

impl ArtifactKind {
    /// In generation order. The module descriptor comes last since it
    /// declares the other four.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Entity,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::Controller,
        ArtifactKind::Module,
    ];

    /// File name infix, as in `candidate.entity.rs`
    pub fn infix(self) -> &'static str {
        match self {
            ArtifactKind::Entity => "entity",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Service => "service",
            ArtifactKind::Controller => "controller",
            ArtifactKind::Module => "module",
        }
    }

    fn template(self) -> &'static str {
        match self {
            ArtifactKind::Entity => ENTITY,
            ArtifactKind::Repository => REPOSITORY,
            ArtifactKind::Service => SERVICE,
            ArtifactKind::Controller => CONTROLLER,
            ArtifactKind::Module => MODULE,
        }
    }

    /// `{name}/{name}.{infix}.rs`, relative to the source directory.
    pub fn relative_path(self, name: &FeatureName) -> PathBuf {
        let normalized = name.normalized();
        PathBuf::from(normalized).join(format!("{normalized}.{}.rs", self.infix()))
    }
}

/// One rendered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,

    /// Relative to the host project's source directory
    pub relative_path: PathBuf,

    pub contents: String,
}

impl Artifact {
    pub fn render(kind: ArtifactKind, name: &FeatureName) -> Artifact {
        Artifact {
            kind,
            relative_path: kind.relative_path(name),
            contents: render(kind, name),
        }
    }
}

/// Render all five artifacts for `name`.
pub fn render_all(name: &FeatureName) -> Vec<Artifact> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| Artifact::render(kind, name))
        .collect()
}

pub fn render(kind: ArtifactKind, name: &FeatureName) -> String {
    kind.template()
        .replace("{{TypeName}}", name.type_name())
        .replace("{{name}}", &escape(name.normalized()))
}

/// Source of a composition root with no feature modules registered.
pub fn composition_root() -> &'static str {
    COMPOSITION_ROOT
}

/// Escape `src` for use between the quotes of a Rust string literal.
pub(crate) fn escape(src: &str) -> String {
    src.escape_debug().to_string()
}
