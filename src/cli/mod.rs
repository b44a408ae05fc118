pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "sehd")]
#[command(about = "SEHD CLI - command-line access to the admissions API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "SEHD_API_URL", default_value = "http://localhost:5000", help = "API base URL")]
    pub url: String,

    #[arg(long, global = true, env = "SEHD_TOKEN", hide_env_values = true, help = "Bearer token for protected endpoints")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Local password utilities")]
    Password {
        #[command(subcommand)]
        cmd: commands::password::PasswordCommands,
    },

    #[command(about = "Server health and information")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },

    #[command(about = "Authentication and token management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Admissions data queries")]
    Admissions {
        #[command(subcommand)]
        cmd: commands::admissions::AdmissionCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url, cli.token.clone())?;

    match cli.command {
        Commands::Password { cmd } => commands::password::handle(cmd, output_format),
        Commands::Server { cmd } => commands::server::handle(cmd, &client, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, &client, output_format).await,
        Commands::Admissions { cmd } => commands::admissions::handle(cmd, &client, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sehd", "admissions", "summary", "Fall24", "--json", "--url", "http://api:8080"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.url, "http://api:8080");
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
    }

    #[test]
    fn password_hash_takes_plaintext() {
        let cli = Cli::try_parse_from(["sehd", "password", "hash", "admin123"]).unwrap();
        assert!(matches!(cli.command, Commands::Password { .. }));
        assert!(Cli::try_parse_from(["sehd", "password", "hash"]).is_err());
    }
}
