// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use qisscraper::{
    config::{
        consts::{DEFAULT_SETTINGS_FILE, SETTINGS_EXAMPLE_FILE},
        Settings,
    },
    error::{PortalError, SettingsError},
    fetch_records,
    record::Report,
};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "qisscraper",
    version,
    about = "Print your exam results and GPA from the QIS portal"
)]
struct Cli {
    /// Settings file holding the portal credentials.
    #[arg(long, env = "QIS_SECRETS", default_value = DEFAULT_SETTINGS_FILE)]
    secrets: PathBuf,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let level = match cli.verbose {
        0 => "warn",
        1 => "warn,qisscraper=info",
        _ => "info,qisscraper=debug",
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .without_time()
        .init();

    // ─── 2) credentials, before any request ──────────────────────────
    let settings = match Settings::load(&cli.secrets) {
        Ok(settings) => settings,
        Err(SettingsError::Created { path }) => {
            eprintln!(
                "File {} was missing and thus created. Please maintain your credentials.\n\
                 See {} for an example.",
                path.display(),
                SETTINGS_EXAMPLE_FILE
            );
            return ExitCode::from(1);
        }
        Err(SettingsError::BlankCredentials) => {
            eprintln!("Please maintain your credentials.");
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("error: {} ({})", err, cli.secrets.display());
            return ExitCode::from(1);
        }
    };

    // ─── 3) fetch, extract, report ───────────────────────────────────
    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.chain().find_map(|e| e.downcast_ref::<PortalError>()) {
                Some(pe) if matches!(pe, PortalError::LinkNotFound { .. }) => eprintln!(
                    "{}\n\nA {} error occurred while trying to access the website.\n\
                     Make sure your credentials are properly maintained.",
                    pe,
                    pe.kind()
                ),
                _ => eprintln!("error: {:#}", err),
            }
            ExitCode::from(1)
        }
    }
}

fn run(settings: &Settings) -> Result<()> {
    let records = fetch_records(settings)?;
    Report::new(&records)
        .write_to(&mut io::stdout().lock())
        .context("writing report")?;
    info!("all done");
    Ok(())
}
