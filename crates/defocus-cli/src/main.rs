use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "defocus", version, about = "Defocus CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Focus session control
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Defocus break control
    Defocus {
        #[command(subcommand)]
        action: commands::defocus::DefocusAction,
    },
    /// Quick reset breathing countdown
    Quickreset {
        #[command(subcommand)]
        action: commands::quickreset::QuickResetAction,
    },
    /// Session statistics and messages
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Session state administration
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Focus { action } => commands::focus::run(action),
        Commands::Defocus { action } => commands::defocus::run(action),
        Commands::Quickreset { action } => commands::quickreset::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
