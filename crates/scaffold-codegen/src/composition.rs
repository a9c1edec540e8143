//! The application composition root.
//!
//! The root file is read into a [`CompositionRoot`]: an ordered list of
//! feature imports, the `IMPORTS` declaration, and every other line kept
//! verbatim. Registering a module edits that structure, and rendering it
//! writes the file back. Nothing outside the recognized items is rewritten.
//!
//! A feature import is the three line group
//!
//! ```text
//! #[path = "job-role/job-role.module.rs"]
//! pub mod job_role;
//! use job_role::JobRoleModule;
//! ```
//!
//! and the declaration is `pub static IMPORTS: &[&dyn Module] = &[...];`.

use crate::name::is_ident;
use crate::template::escape;
use crate::{Error, FeatureName, Result};

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Parsed composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionRoot {
    items: Vec<Item>,

    /// Index of the `IMPORTS` declaration in `items`
    list: usize,

    trailing_newline: bool,

    /// Line terminator of the source file, `"\n"` or `"\r\n"`
    newline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Passed through untouched
    Line(String),

    Feature(FeatureImport),

    Imports(ImportsList),
}

/// Declaration and import of one feature module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureImport {
    /// Contents of the `#[path = "..."]` literal, relative to the root file
    pub path: String,

    /// Rust module identifier
    pub module: String,

    /// Module descriptor type, e.g. `JobRoleModule`
    pub type_name: String,

    /// Whether the module is declared `pub mod`
    pub public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ImportsList {
    /// Everything up to and including the opening `&[`
    prefix: String,

    /// Registered type names, without the leading `&`
    entries: Vec<String>,

    /// The closing `];` and anything after it on that line
    suffix: String,
}

/// What [`CompositionRoot::register`] changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// The feature import was added
    pub import_added: bool,

    /// The module was appended to `IMPORTS`
    pub entry_added: bool,
}

/// The composition root text could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line, when the problem is tied to one
    pub line: Option<usize>,
    pub reason: &'static str,
}

impl FeatureImport {
    /// The import for a freshly generated feature: the module descriptor in
    /// the feature's own directory.
    pub fn for_feature(name: &FeatureName) -> FeatureImport {
        let dir = escape(name.normalized());

        FeatureImport {
            path: format!("{dir}/{dir}.module.rs"),
            module: name.module_ident(),
            type_name: name.module_type(),
            public: true,
        }
    }

    fn use_line(&self) -> String {
        format!("use {}::{};", self.module, self.type_name)
    }

    /// Parses the three line group at the start of `lines`.
    fn parse(lines: &[&str]) -> Option<FeatureImport> {
        let [attr, decl, import, ..] = lines else {
            return None;
        };

        let path = attr
            .trim()
            .strip_prefix("#[path = \"")?
            .strip_suffix("\"]")?;

        let decl = decl.trim();
        let (public, decl) = match decl.strip_prefix("pub ") {
            Some(rest) => (true, rest),
            None => (false, decl),
        };
        let module = decl.strip_prefix("mod ")?.strip_suffix(';')?.trim();

        let type_name = import
            .trim()
            .strip_prefix("use ")?
            .strip_suffix(';')?
            .strip_prefix(module)?
            .strip_prefix("::")?;

        if !is_ident(module.strip_prefix("r#").unwrap_or(module)) || !is_ident(type_name) {
            return None;
        }

        Some(FeatureImport {
            path: path.to_string(),
            module: module.to_string(),
            type_name: type_name.to_string(),
            public,
        })
    }
}

impl FeatureImport {
    fn lines(&self) -> [String; 3] {
        let vis = if self.public { "pub " } else { "" };
        [
            format!("#[path = \"{}\"]", self.path),
            format!("{vis}mod {};", self.module),
            self.use_line(),
        ]
    }
}

impl fmt::Display for FeatureImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

impl ImportsList {
    fn parse(decl: &str) -> std::result::Result<ImportsList, &'static str> {
        let eq = decl.find('=').ok_or("`IMPORTS` has no initializer")?;
        let open = decl[eq..]
            .find("&[")
            .map(|i| eq + i + 2)
            .ok_or("`IMPORTS` initializer is not a slice literal")?;
        let close = decl[open..]
            .find("];")
            .map(|i| open + i)
            .ok_or("`IMPORTS` slice is not closed with `];`")?;

        // Comments between the brackets are not preserved
        let entries = decl[open..close]
            .split(',')
            .map(|entry| entry.trim().trim_start_matches('&').trim())
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();

        Ok(ImportsList {
            prefix: decl[..open].to_string(),
            entries,
            suffix: decl[close..].to_string(),
        })
    }
}

impl fmt::Display for ImportsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "&{entry}")?;
        }
        f.write_str(&self.suffix)
    }
}

impl CompositionRoot {
    /// Register a feature module.
    ///
    /// The import and the `IMPORTS` entry are checked independently, so
    /// registering the same module twice is a no-op and a root that has only
    /// one of the two is completed rather than duplicated.
    pub fn register(&mut self, import: FeatureImport) -> Registration {
        let import_added = !self.has_import(&import);
        let entry_added = !self.is_listed(&import.type_name);

        if entry_added {
            self.list_mut().entries.push(import.type_name.clone());
        }

        if import_added {
            self.insert_import(import);
        }

        Registration {
            import_added,
            entry_added,
        }
    }

    /// Feature imports, in file order.
    pub fn feature_imports(&self) -> impl Iterator<Item = &FeatureImport> {
        self.items.iter().filter_map(|item| match item {
            Item::Feature(import) => Some(import),
            _ => None,
        })
    }

    /// Type names listed in `IMPORTS`, in order.
    pub fn imports(&self) -> &[String] {
        &self.list().entries
    }

    pub fn is_listed(&self, type_name: &str) -> bool {
        self.imports().iter().any(|entry| entry == type_name)
    }

    /// A feature import declaring the same module or type as `import` from
    /// a different path. Registering `import` next to it would leave one of
    /// the two unreachable.
    pub fn conflicting(&self, import: &FeatureImport) -> Option<&FeatureImport> {
        self.feature_imports().find(|existing| {
            existing.path != import.path
                && (existing.type_name == import.type_name || existing.module == import.module)
        })
    }

    /// An import counts as present if a feature import declares the same
    /// path or type, or if its `use` line appears verbatim anywhere.
    pub fn has_import(&self, import: &FeatureImport) -> bool {
        let use_line = import.use_line();

        self.items.iter().any(|item| match item {
            Item::Feature(existing) => {
                existing.path == import.path || existing.type_name == import.type_name
            }
            Item::Line(line) => line.trim() == use_line,
            Item::Imports(_) => false,
        })
    }

    fn list(&self) -> &ImportsList {
        match &self.items[self.list] {
            Item::Imports(list) => list,
            _ => unreachable!("`list` always indexes the IMPORTS declaration"),
        }
    }

    fn list_mut(&mut self) -> &mut ImportsList {
        match &mut self.items[self.list] {
            Item::Imports(list) => list,
            _ => unreachable!("`list` always indexes the IMPORTS declaration"),
        }
    }

    /// New imports go after the last feature import. Failing that, after the
    /// last top-level `use` statement, separated by a blank line. Failing
    /// that, after any leading inner doc comments and attributes.
    fn insert_import(&mut self, import: FeatureImport) {
        let new = Item::Feature(import);

        if let Some(last) = self.items.iter().rposition(|item| matches!(item, Item::Feature(_))) {
            self.insert_items(last + 1, vec![new]);
        } else if let Some(end) = self.last_use_end() {
            self.insert_items(end + 1, vec![Item::Line(String::new()), new]);
        } else {
            let at = self
                .items
                .iter()
                .position(|item| match item {
                    Item::Line(line) => !is_header_line(line),
                    _ => true,
                })
                .unwrap_or(self.items.len());

            self.insert_items(at, vec![new, Item::Line(String::new())]);
        }
    }

    fn insert_items(&mut self, at: usize, items: Vec<Item>) {
        if at <= self.list {
            self.list += items.len();
        }
        self.items.splice(at..at, items);
    }

    /// Index of the line ending the last top-level `use` statement.
    fn last_use_end(&self) -> Option<usize> {
        let start = self.items.iter().rposition(|item| match item {
            Item::Line(line) => line.starts_with("use ") || line.starts_with("pub use "),
            _ => false,
        })?;

        let end = self.items[start..].iter().position(|item| match item {
            Item::Line(line) => line.trim_end().ends_with(';'),
            _ => false,
        })?;

        Some(start + end)
    }
}

impl FromStr for CompositionRoot {
    type Err = ParseError;

    fn from_str(src: &str) -> std::result::Result<Self, ParseError> {
        let lines: Vec<&str> = src.lines().collect();
        let mut items = vec![];
        let mut list = None;
        let mut i = 0;

        while i < lines.len() {
            if let Some(import) = FeatureImport::parse(&lines[i..]) {
                items.push(Item::Feature(import));
                i += 3;
                continue;
            }

            if is_imports_decl(lines[i]) {
                if list.is_some() {
                    return Err(ParseError::at(i, "duplicate `IMPORTS` declaration"));
                }

                // The declaration runs until the line closing the slice
                let end = lines[i..]
                    .iter()
                    .position(|line| line.contains("];"))
                    .map(|n| i + n)
                    .ok_or(ParseError::at(i, "`IMPORTS` slice is not closed with `];`"))?;

                let decl = lines[i..=end].join("\n");
                let parsed = ImportsList::parse(&decl).map_err(|reason| ParseError::at(i, reason))?;

                list = Some(items.len());
                items.push(Item::Imports(parsed));
                i = end + 1;
                continue;
            }

            items.push(Item::Line(lines[i].to_string()));
            i += 1;
        }

        let Some(list) = list else {
            return Err(ParseError {
                line: None,
                reason: "no `IMPORTS` declaration",
            });
        };

        Ok(CompositionRoot {
            items,
            list,
            trailing_newline: src.is_empty() || src.ends_with('\n'),
            newline: if src.contains("\r\n") { "\r\n" } else { "\n" },
        })
    }
}

impl fmt::Display for CompositionRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(self.newline)?;
            }

            match item {
                Item::Line(line) => f.write_str(line)?,
                Item::Feature(import) => f.write_str(&import.lines().join(self.newline))?,
                Item::Imports(list) => f.write_str(&list.to_string().replace('\n', self.newline))?,
            }
        }

        if self.trailing_newline {
            f.write_str(self.newline)?;
        }

        Ok(())
    }
}

impl ParseError {
    fn at(index: usize, reason: &'static str) -> ParseError {
        ParseError {
            line: Some(index + 1),
            reason,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.reason),
            None => f.write_str(self.reason),
        }
    }
}

impl std::error::Error for ParseError {}

impl Registration {
    pub fn is_changed(self) -> bool {
        self.import_added || self.entry_added
    }
}

/// Read the composition root at `path`, register `import`, and write it back
/// if anything changed.
///
/// A missing file is an error. Nothing is created in its place.
pub fn patch_composition_root(path: impl AsRef<Path>, import: FeatureImport) -> Result<Registration> {
    let path = path.as_ref();

    let src = fs::read_to_string(path).map_err(Error::io("read", path))?;
    let mut root: CompositionRoot =
        src.parse()
            .map_err(|source| Error::MalformedCompositionRoot {
                path: path.to_path_buf(),
                source,
            })?;

    if let Some(existing) = root.conflicting(&import) {
        return Err(Error::NameCollision {
            type_name: import.type_name,
            path: import.path,
            existing: existing.path.clone(),
        });
    }

    let type_name = import.type_name.clone();
    let registration = root.register(import);

    if !registration.is_changed() {
        debug!(module = %type_name, path = %path.display(), "already registered");
        return Ok(registration);
    }

    fs::write(path, root.to_string()).map_err(Error::io("write", path))?;
    info!(
        module = %type_name,
        path = %path.display(),
        import_added = registration.import_added,
        entry_added = registration.entry_added,
        "registered module"
    );

    Ok(registration)
}

fn is_imports_decl(line: &str) -> bool {
    let line = line.trim_start();

    // Skip a `pub` or `pub(...)` visibility
    let decl = if line.starts_with("pub") {
        line.find(" static ").map(|at| &line[at + 1..])
    } else {
        Some(line)
    };

    decl.and_then(|decl| decl.strip_prefix("static IMPORTS"))
        .is_some_and(|rest| rest.starts_with(|ch: char| ch == ':' || ch.is_whitespace()))
}

fn is_header_line(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("//!") || line.starts_with("#![")
}
