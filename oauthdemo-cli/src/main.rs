//! Main entry point for the OAuthDemo CLI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::client::Config;
use std::path::PathBuf;

use commands::session::HelloCommand;

mod commands;
mod logging;

/// OAuthDemo CLI
#[derive(Parser)]
#[command(name = "oauthdemo", version)]
#[command(about = "Terminal front-end for the Google OAuth2 demo backend", long_about = None)]
struct Cli {
    /// Path to the configuration file (optional)
    #[arg(
        long,
        short,
        global = true,
        help = "Path to the configuration file (.yaml, .yml, .json, or .toml). If not provided, defaults and environment variables are used."
    )]
    config: Option<PathBuf>,

    /// Backend origin, overriding the configuration file and environment
    #[arg(
        long,
        global = true,
        help = "Backend origin (e.g., localhost:8080 or https://demo.example.com). Overrides OAUTHDEMO_API_URL."
    )]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the OAuthDemo CLI
#[derive(Subcommand)]
enum Commands {
    /// Resolve the session and show who is signed in
    Whoami,
    /// Print the Google sign-in URL
    Login,
    /// Print the logout URL and forget the local session
    Logout,
    /// Call the greeting endpoints
    Hello {
        #[command(subcommand)]
        action: HelloCommand,
    },
    /// Manage the stored session cookie
    Cookie {
        #[command(subcommand)]
        action: CookieCommand,
    },
    /// Drive the demo from an interactive prompt
    Interactive,

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(
            long,
            short,
            help = "The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)"
        )]
        shell: String,
    },

    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml, json, or toml). Defaults to yaml.
        #[arg(
            long,
            short,
            help = "Format of the configuration file to generate (yaml, json, or toml). Defaults to yaml."
        )]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
enum CookieCommand {
    /// Store a cookie copied from the browser, e.g. `JSESSIONID=...`
    Import { cookie: String },
    /// Remove the stored cookies
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let Cli {
        config: config_path,
        api_url,
        command,
    } = Cli::parse();

    let load = || -> Result<Config> {
        let config = Config::load_config(config_path.as_deref(), api_url.clone())
            .context("failed to load configuration")?;
        logging::initialize_tracing(&config.logging)?;
        Ok(config)
    };

    match command {
        Commands::Whoami => commands::session::whoami(&load()?).await,
        Commands::Login => commands::session::login(&load()?).await,
        Commands::Logout => commands::session::logout(&load()?).await,
        Commands::Hello { action } => commands::session::hello(&load()?, action).await,
        Commands::Cookie { action } => cookie(&load()?, action),
        Commands::Interactive => commands::interactive::run(&load()?).await,
        Commands::Completion { shell } => {
            let shell = shell
                .parse::<clap_complete::Shell>()
                .map_err(|err| anyhow::anyhow!("invalid shell type '{shell}': {err}"))?;
            commands::completion::generate_completion(shell);
            Ok(())
        }
        Commands::Config { format } => {
            let format = format.unwrap_or_else(|| "yaml".to_string());
            commands::config::generate_config(&format)
        }
    }
}

fn cookie(config: &Config, action: CookieCommand) -> Result<()> {
    let path = commands::jar::session_path();
    match action {
        CookieCommand::Import { cookie } => {
            let origin = commands::session::Workspace::origin_of(config)?;
            commands::jar::import_cookie(&origin, &path, &cookie)?;
            println!("Session cookie saved to {}", path.display());
        }
        CookieCommand::Clear => {
            if commands::jar::clear(&path)? {
                println!("Removed {}", path.display());
            } else {
                println!("No stored session.");
            }
        }
    }
    Ok(())
}
