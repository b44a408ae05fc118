use clap::Subcommand;

use crate::cli::{client::ApiClient, utils::{field, output_value, percent}, OutputFormat};

#[derive(Subcommand)]
pub enum AdmissionCommands {
    #[command(about = "Totals and rates for a term, e.g. Fall24")]
    Summary {
        #[arg(help = "Term code")]
        term: String,
    },
}

pub async fn handle(cmd: AdmissionCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AdmissionCommands::Summary { term } => {
            client.require_token()?;
            let body = client.get(&format!("/api/admissionsdata/summary/{}", term)).await?;
            output_value(output_format, &body, |v| {
                println!("Term {} ({} records)", field(v, "term"), field(v, "recordCount"));
                println!("  Applied:   {}", field(v, "totalApplied"));
                println!("  Admitted:  {}", field(v, "totalAdmitted"));
                println!("  Denied:    {}", field(v, "totalDenied"));
                println!("  Gross dep.: {}", field(v, "totalGrossDeposited"));
                println!("  Net dep.:   {}", field(v, "totalNetDeposited"));
                println!("  Admission rate: {}", percent(v, "admissionRate"));
                println!("  Denial rate:    {}", percent(v, "denialRate"));
                println!("  Deposit rate:   {}", percent(v, "depositRate"));
            })
        }
    }
}
