use clap::{CommandFactory, Parser};
use wordfreq::app::{handle_fatal_error, initialize_app};
use wordfreq::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        handle_fatal_error(e, verbose);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = initialize_app(cli.verbose, cli.config).await?;
    execute_command(command, &config).await
}
