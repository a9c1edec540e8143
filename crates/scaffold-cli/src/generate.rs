use crate::theme::dialoguer_theme;
use crate::Config;
use anyhow::Result;
use clap::Parser;
use console::style;
use dialoguer::Confirm;
use scaffold_codegen::{FeatureName, WriteOutcome};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Feature name, e.g. `candidate` or `job-role`
    name: Option<String>,

    /// Overwrite artifacts that already exist
    #[arg(long)]
    force: bool,

    /// Skip the confirmation prompt when overwriting
    #[arg(short, long)]
    yes: bool,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        // Fails before anything else happens when the name is missing
        let feature = FeatureName::parse(self.name.as_deref().unwrap_or_default())?;

        println!();
        println!("  {}", style("Generate Feature").cyan().bold().underlined());
        println!();

        if self.force && !self.yes {
            let confirmed = Confirm::with_theme(&dialoguer_theme())
                .with_prompt(format!(
                    "Overwrite any existing `{}` files?",
                    feature.normalized()
                ))
                .default(false)
                .interact()?;

            if !confirmed {
                println!();
                println!("  {}", style("Aborted.").dim());
                println!();
                return Ok(());
            }
        }

        let report = config
            .generator()
            .force(self.force)
            .generate(feature.raw())?;

        for (path, outcome) in &report.artifacts {
            let verb = match outcome {
                WriteOutcome::Written => "Created",
                WriteOutcome::Overwritten => "Replaced",
                WriteOutcome::Skipped => continue,
            };

            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("{verb} {}", path.display())).dim()
            );
        }

        if report.registration.is_changed() {
            println!(
                "  {} {}",
                style("→").cyan(),
                style(format!(
                    "Registered {} in {}",
                    report.feature.module_type(),
                    config.generator().composition_root_path().display()
                ))
                .dim()
            );
        }

        println!();
        println!(
            "  {}",
            style(format!(
                "Feature '{}' generated successfully",
                report.feature.normalized()
            ))
            .green()
            .bold()
        );
        println!();

        Ok(())
    }
}
