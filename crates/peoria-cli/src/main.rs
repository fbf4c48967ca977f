use clap::Parser;
use tracing_subscriber::EnvFilter;

use peoria_cli::Cli;
use peoria_cli::config::CliConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load();
    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            tracing::error!("{problem}");
        }
        anyhow::bail!("invalid configuration");
    }

    peoria_cli::run(cli, &config, &mut std::io::stdout().lock())
}
