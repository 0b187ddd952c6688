//! CLI Adapter.

mod generate;

use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "kompose-rpmspec")]
#[command(version)]
#[command(
    about = "Generate the kompose RPM spec file with gofed and patch it for release",
    long_about = None
)]
struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run gofed and print the patched spec file
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// List built-in packaging profiles
    #[clap(visible_alias = "ls")]
    Profiles,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let logging = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(Env::default().default_filter_or(logging));

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Profiles => run_profiles(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_profiles() -> Result<(), AppError> {
    let profiles = crate::app::api::profiles()?;
    println!("Available profiles:");
    for profile in profiles {
        println!("  {} - {}", profile.name, profile.description);
        println!("      {} -> {}/", profile.import_path, profile.package);
    }
    Ok(())
}
