mod extract;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use outwatch_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "outwatch-cli")]
#[command(about = "Outage status page extraction and pain index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract a saved status page and score it
    Extract {
        /// Path to the saved HTML page
        #[arg(long)]
        input: PathBuf,

        /// YAML selector contract (overrides `OUTWATCH_SELECTORS_PATH`)
        #[arg(long)]
        selectors: Option<PathBuf>,

        /// Provider name recorded in the output (defaults to the file stem)
        #[arg(long)]
        provider: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Also write the JSON output into the reports directory
        #[arg(long)]
        save: bool,
    },
    /// Compute a pain index from raw inputs
    Pain {
        /// Share of negative community reports (0-100)
        #[arg(long)]
        negative: f64,

        /// Share of reports naming internet problems (0-100)
        #[arg(long)]
        internet: f64,

        /// Share of reports naming a total blackout (0-100)
        #[arg(long)]
        blackout: f64,

        /// Cities with an active outage
        #[arg(long)]
        active: usize,

        /// Cities with any activity
        #[arg(long)]
        total: usize,
    },
    /// Print the built-in selector contract as YAML
    Selectors,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = run(cli.command, || {
        dotenvy::dotenv().ok();
        let config = outwatch_core::load_app_config_from_env()?;
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(config)
    })?;
    print!("{output}");
    Ok(())
}

/// Execute `command` and return what it prints.
///
/// Only commands that read configuration call `load_config`, so a broken
/// environment never affects `pain` or `selectors`.
fn run<F>(command: Commands, load_config: F) -> anyhow::Result<String>
where
    F: FnOnce() -> anyhow::Result<AppConfig>,
{
    match command {
        Commands::Extract {
            input,
            selectors,
            provider,
            pretty,
            save,
        } => {
            let config = load_config()?;
            let options = extract::ExtractOptions {
                input,
                selectors,
                provider,
                pretty,
                save,
            };
            let json = extract::run_extract(&config, &options)?;
            Ok(format!("{json}\n"))
        }
        Commands::Pain {
            negative,
            internet,
            blackout,
            active,
            total,
        } => {
            let index = outwatch_insight::compute(negative, internet, blackout, active, total);
            Ok(format!("{index}\n"))
        }
        Commands::Selectors => Ok(serde_yaml::to_string(
            &outwatch_core::SelectorConfig::default(),
        )?),
    }
}
