use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use mailroom::app::App;
use mailroom::cli::CliArgs;
use mailroom::config::Config;

fn main() -> Result<()> {
    // Initialize tracing with env filter; stdout is reserved for letters and reports
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli_args = CliArgs::parse();
    info!("Starting Mailroom");

    let config = Config::from_cli_and_file(&cli_args)?;
    let mut app = App::new(&config);

    match app.execute(cli_args.command.into()) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            error!("Command failed: {}", err);
            return Err(err);
        }
    }

    info!("Mailroom finished");
    Ok(())
}
