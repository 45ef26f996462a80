use clap::Parser;
use colored::Colorize;

use htmlpack::cli::Cli;

#[tokio::main]
async fn main() {
    let config = Cli::parse().into_config();

    let default_filter = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    // Missing referenced resources are warned and skipped inside the run;
    // everything that reaches here as an Err is fatal.
    if let Err(e) = htmlpack::run(&config).await {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
