use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "imc-cli")]
#[command(about = "Command line client for the IMC API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5600")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service description
    Info,
    /// Classify a body mass index value
    Classify {
        /// IMC value, e.g. 25.5
        valor: String,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match &cli.command {
        Commands::Info => client.get(format!("{base}/")),
        Commands::Classify { valor } => client
            .get(format!("{base}/imc"))
            .query(&[("valor", valor.as_str())]),
        Commands::Health => client.get(format!("{base}/health")),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: IMC API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(ExitCode::SUCCESS)
}
