use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use warkop_launcher::{logging, CommandSpec, Config, Launcher};

#[derive(Parser, Debug)]
#[command(name = "warkop-launcher")]
#[command(about = "Run the Warkop Flask app and exit with its status", long_about = None)]
struct Args {
    /// Load configuration from this file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Program and arguments to run instead of the configured command
    #[arg(
        value_name = "PROGRAM",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    if let Some(command) = CommandSpec::from_argv(&args.command) {
        config.command = command;
    }

    Ok(config)
}

async fn run(args: Args) -> i32 {
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return warkop_launcher::error::EXIT_FAILURE;
        }
    };

    println!("{}", config.messages.starting);

    match Launcher::new(config.command).run().await {
        Ok(report) => {
            println!("{}", config.messages.exited_line(&report.code_display()));
            report.exit_code()
        }
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();

    let code = run(args).await;

    let _ = io::stdout().flush();
    std::process::exit(code);
}
