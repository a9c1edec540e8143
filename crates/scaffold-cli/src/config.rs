use anyhow::{bail, Context, Result};
use scaffold_codegen::{Generator, DEFAULT_COMPOSITION_ROOT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE_VERSION: u32 = 1;

/// Default location of the configuration file, relative to the working
/// directory.
pub const CONFIG_FILE: &str = "Scaffold.toml";

/// Configuration for scaffold CLI operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Config file format version
    version: u32,

    /// Host project source directory feature modules are generated into
    pub source_dir: PathBuf,

    /// Composition root, relative to `source_dir`
    pub composition_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_FILE_VERSION,
            source_dir: PathBuf::from("src"),
            composition_root: PathBuf::from(DEFAULT_COMPOSITION_ROOT),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source directory
    pub fn source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_dir = path.into();
        self
    }

    /// Set the composition root path
    pub fn composition_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.composition_root = path.into();
        self
    }

    /// Load a config file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid config `{}`", path.display()))
    }

    /// Loads the config file, or returns the defaults if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }

    /// Save the config to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_string())?;
        Ok(())
    }

    /// A generator for the configured host project
    pub fn generator(&self) -> Generator {
        Generator::new(&self.source_dir).composition_root(&self.composition_root)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;

        // Validate version
        if config.version != CONFIG_FILE_VERSION {
            bail!(
                "Unsupported config file version: {}. Expected version {}",
                config.version,
                CONFIG_FILE_VERSION
            );
        }

        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}
