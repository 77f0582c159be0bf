mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shopline_api::{Client, OPEN_API_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "shopline")]
#[command(about = "Query a Shopline store through the Open API")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Open API access token
    #[arg(long, env = "SHOPLINE_ACCESS_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "SHOPLINE_BASE_URL", global = true, default_value = OPEN_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, show or cancel orders
    Orders(commands::orders::OrdersArgs),
    /// List or show customers
    Customers(commands::customers::CustomersArgs),
    /// List or show payments
    Payments(commands::payments::PaymentsArgs),
    /// List or show shipments
    Shipments(commands::shipments::ShipmentsArgs),
    /// List, show or delete webhooks
    Webhooks(commands::webhooks::WebhooksArgs),
    /// Show the merchant the token belongs to
    Merchant,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("shopline=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let token = cli
        .token
        .filter(|t| !t.trim().is_empty())
        .context("access token required: pass --token or set SHOPLINE_ACCESS_TOKEN")?;
    let client = Client::with_base_url(&cli.base_url, &token);

    match &cli.command {
        Commands::Orders(args) => commands::orders::run(args, &client, &format).await?,
        Commands::Customers(args) => commands::customers::run(args, &client, &format).await?,
        Commands::Payments(args) => commands::payments::run(args, &client, &format).await?,
        Commands::Shipments(args) => commands::shipments::run(args, &client, &format).await?,
        Commands::Webhooks(args) => commands::webhooks::run(args, &client, &format).await?,
        Commands::Merchant => commands::merchant::run(&client, &format).await?,
    }

    Ok(())
}
