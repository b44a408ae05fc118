use anyhow::anyhow;
use clap::Subcommand;
use serde_json::json;

use crate::cli::{client::ApiClient, utils::{field, output_value}, OutputFormat};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Log in and print a bearer token")]
    Login {
        #[arg(help = "Email address")]
        email: String,
        #[arg(long, env = "SEHD_PASSWORD", hide_env_values = true, help = "Password")]
        password: String,
    },

    #[command(about = "Show the profile behind the current token")]
    Profile,
}

pub async fn handle(cmd: AuthCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let body = client
                .post("/api/auth/login", &json!({ "email": email, "password": password }))
                .await?;
            let token = body
                .get("token")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("login response carried no token"))?
                .to_string();

            output_value(output_format, &body, |v| {
                let user = &v["user"];
                eprintln!("✓ Logged in as {} ({})", field(user, "fullName"), field(user, "role"));
                println!("{}", token);
            })
        }
        AuthCommands::Profile => {
            client.require_token()?;
            let body = client.get("/api/auth/profile").await?;
            output_value(output_format, &body, |v| {
                println!("{} <{}>", field(v, "fullName"), field(v, "email"));
                println!("Role: {}", field(v, "role"));
                println!("Last login: {}", field(v, "lastLogin"));
            })
        }
    }
}
