use clap::Subcommand;
use serde_json::json;

use crate::auth::hash_password;
use crate::cli::{utils::output_value, OutputFormat};

#[derive(Subcommand)]
pub enum PasswordCommands {
    #[command(about = "Print the stored hash for a plaintext password")]
    Hash {
        #[arg(help = "Plaintext password")]
        plaintext: String,
    },
}

pub fn handle(cmd: PasswordCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        PasswordCommands::Hash { plaintext } => {
            let hash = hash_password(&plaintext);
            output_value(output_format, &json!({ "hash": hash }), |_| println!("{}", hash))
        }
    }
}
