mod config;
mod generate;
mod init;
mod theme;

pub use config::*;
pub use generate::GenerateCommand;
pub use init::InitCommand;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Scaffold CLI library for building custom command-line tools
pub struct ScaffoldCli {
    config: Config,
}

impl ScaffoldCli {
    /// Create a new ScaffoldCli instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new ScaffoldCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments.
    ///
    /// Argument errors, `--help` and `--version` are returned as
    /// [`clap::Error`] for the caller to report.
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::try_parse()?;
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        let mut config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => self.config.clone(),
        };

        if let Some(source_dir) = cli.source_dir {
            config = config.source_dir(source_dir);
        }

        match cli.command {
            Some(Command::Generate(cmd)) => cmd.run(&config),
            Some(Command::Init(cmd)) => cmd.run(&config),
            None => cli.generate.run(&config),
        }
    }
}

impl Default for ScaffoldCli {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(about = "Scaffold - generate layered CRUD feature modules")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the one loaded at startup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Source directory to generate into, overriding the config
    #[arg(long, global = true)]
    source_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    /// `scaffold <NAME>` is shorthand for `scaffold generate <NAME>`.
    /// Subcommand names take precedence over feature names.
    #[command(flatten)]
    generate: GenerateCommand,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate a feature module and register it with the composition root
    Generate(GenerateCommand),

    /// Create an empty composition root
    Init(InitCommand),
}
