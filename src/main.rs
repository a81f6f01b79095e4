use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_payroll::config::ConfigLoader;
use employee_payroll::console::Session;
use employee_payroll::registry::EmployeeRegistry;

#[derive(Parser, Debug)]
#[command(
    name = "employee-payroll",
    version,
    about = "Register employees and total their payroll"
)]
struct Cli {
    /// YAML file with pay rates. Built-in rates are used when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };
    info!(config = ?cli.config, "Configuration ready");

    let registry = EmployeeRegistry::with_rates(loader.rates());
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), registry);
    session.run()?;

    Ok(())
}
