use clap::Subcommand;

use crate::cli::{client::ApiClient, utils::{field, output_value}, OutputFormat};

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health from the /api/health endpoint")]
    Health,

    #[command(about = "Show API name, version and environment")]
    Info,
}

pub async fn handle(cmd: ServerCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health => {
            let body = client.get("/api/health").await?;
            output_value(output_format, &body, |v| {
                println!("✓ {} ({})", field(v, "status"), field(v, "message"));
            })
        }
        ServerCommands::Info => {
            let body = client.get("/api/health/info").await?;
            output_value(output_format, &body, |v| {
                println!("{} v{}", field(v, "apiName"), field(v, "version"));
                println!("Environment: {}", field(v, "environment"));
            })
        }
    }
}
