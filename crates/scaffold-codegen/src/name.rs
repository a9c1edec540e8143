use crate::{Error, Result};

use heck::ToSnakeCase;

/// The names derived from one feature name argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureName {
    /// As supplied by the user
    raw: String,

    /// Lowercased; used for the directory, file prefixes, route segment and
    /// table name
    normalized: String,

    /// Upper camel case; used as the type identifier in generated code
    type_name: String,
}

impl FeatureName {
    /// Derive the feature names from a user supplied token.
    ///
    /// Case folding is the only sanitization applied to the normalized name.
    /// Blank input is rejected, as is any name whose derived type or module
    /// name is not a usable Rust identifier.
    pub fn parse(raw: &str) -> Result<FeatureName> {
        if raw.trim().is_empty() {
            return Err(Error::MissingFeatureName);
        }

        let normalized = raw.to_lowercase();
        let type_name = pascal_case(&normalized);

        let invalid = |reason| Error::InvalidFeatureName {
            name: raw.to_string(),
            reason,
        };

        if !is_ident(&type_name) {
            return Err(invalid("it does not form a Rust identifier"));
        }

        // `Self` is the type name `self` folds into
        if NON_RAW_KEYWORDS.contains(&type_name.as_str())
            || NON_RAW_KEYWORDS.contains(&type_name.to_snake_case().as_str())
        {
            return Err(invalid("it is a reserved Rust keyword"));
        }

        Ok(FeatureName {
            raw: raw.to_string(),
            normalized,
            type_name,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Identifier of the Rust module the feature is declared as, e.g.
    /// `job_role` for `JobRole`. Keywords come out as raw identifiers, as in
    /// `r#match`.
    pub fn module_ident(&self) -> String {
        let ident = self.type_name.to_snake_case();

        if is_keyword(&ident) {
            format!("r#{ident}")
        } else {
            ident
        }
    }

    /// `{TypeName}{suffix}`, e.g. `JobRoleService`.
    pub fn type_with_suffix(&self, suffix: &str) -> String {
        format!("{}{}", self.type_name, suffix)
    }

    pub fn module_type(&self) -> String {
        self.type_with_suffix("Module")
    }
}

/// Upper camel case: every run of `-`, `_` or whitespace is removed and the
/// character following it is uppercased, as is the first character.
///
/// Other characters pass through untouched; this is not a general word
/// splitter.
fn pascal_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut upper_next = true;

    for ch in src.chars() {
        if is_separator(ch) {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

fn is_separator(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

/// https://doc.rust-lang.org/reference/keywords.html
const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

pub(crate) fn is_keyword(ident: &str) -> bool {
    KEYWORDS.contains(&ident)
}

/// A plain (non-raw) identifier: a letter or `_` followed by letters, digits
/// or `_`. A lone `_` is not an identifier.
pub(crate) fn is_ident(src: &str) -> bool {
    let mut chars = src.chars();
    src != "_"
        && matches!(chars.next(), Some(ch) if ch == '_' || ch.is_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_alphanumeric())
}
