use clap::Parser;
use legal_scout_server::cli::{categories_cmd, scrape_cmd, serve_cmd, Cli, Command};
use legal_scout_server::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose, cli.log_json);

    match cli.command {
        Command::Scrape {
            url,
            strategy,
            json,
        } => scrape_cmd::run(&url, strategy, json).await,
        Command::Serve { host, port } => serve_cmd::run(&host, port).await,
        Command::Categories { json } => {
            categories_cmd::run(json);
            Ok(())
        }
    }
}
