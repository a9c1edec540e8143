use clap::error::ErrorKind;
use console::style;
use scaffold_cli::{Config, ScaffoldCli, CONFIG_FILE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SCAFFOLD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load_or_default(CONFIG_FILE)
        .and_then(|config| ScaffoldCli::with_config(config).parse_and_run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is::<clap::Error>() => report_clap_error(err),
        Err(err) => {
            let missing_name = err
                .downcast_ref::<scaffold_codegen::Error>()
                .is_some_and(scaffold_codegen::Error::is_missing_feature_name);

            if missing_name {
                eprintln!("{} missing feature name", style("error:").red().bold());
                eprintln!();
                eprintln!("Usage: scaffold [generate] <NAME>");
            } else {
                eprintln!("{} {err:#}", style("error:").red().bold());
            }

            ExitCode::from(1)
        }
    }
}

/// clap's own message already carries usage. Help and version output are
/// not failures.
fn report_clap_error(err: anyhow::Error) -> ExitCode {
    let Ok(err) = err.downcast::<clap::Error>() else {
        return ExitCode::from(1);
    };

    // Printing only fails if stdout/stderr are gone
    let _ = err.print();

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    }
}
