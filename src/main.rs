use clap::Parser;
use explorer_tui::cli::{Cli, Command};
use explorer_tui::{headless, logging, ui};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Command::Fetch(args)) => {
            logging::init_stderr_tracing();
            cli.load_config()
                .map_err(anyhow::Error::from)
                .and_then(|config| headless::fetch(&config, args))
                .and_then(|value| {
                    println!("{}", serde_json::to_string_pretty(&value)?);
                    Ok(())
                })
        }
        None => {
            logging::init_tracing();
            cli.load_config()
                .map_err(anyhow::Error::from)
                .and_then(ui::run)
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
