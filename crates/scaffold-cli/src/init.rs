use crate::Config;
use anyhow::Result;
use clap::Parser;
use console::style;
use scaffold_codegen::WriteOutcome;

#[derive(Parser, Debug)]
pub struct InitCommand {}

impl InitCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let generator = config.generator();
        let path = generator.composition_root_path();

        let message = match generator.init()? {
            WriteOutcome::Skipped => {
                style(format!("{} already exists", path.display())).dim()
            }
            _ => style(format!("Created {}", path.display())).green().bold(),
        };

        println!();
        println!("  {message}");
        println!();

        Ok(())
    }
}
