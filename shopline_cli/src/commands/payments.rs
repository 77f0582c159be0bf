use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shopline_api::{Client, PaymentQuery, Query};

use super::{fetch_list, PageArgs};
use crate::output::{print_page_summary, print_payments, OutputFormat};

#[derive(Args)]
pub struct PaymentsArgs {
    #[command(subcommand)]
    pub command: PaymentsCommand,
}

#[derive(Subcommand)]
pub enum PaymentsCommand {
    /// List payments, optionally for a single order
    List(PaymentsListArgs),
    /// Show one payment
    Get {
        /// Payment ID
        id: String,
    },
}

#[derive(Args)]
pub struct PaymentsListArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    /// Only payments of this order
    #[arg(long)]
    pub order_id: Option<String>,

    /// Filter by status (e.g. authorized, captured, refunded)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by gateway
    #[arg(long)]
    pub gateway: Option<String>,
}

pub async fn run(args: &PaymentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        PaymentsCommand::List(list) => run_list(list, client, format).await,
        PaymentsCommand::Get { id } => {
            let payment = client
                .get_payment(id)
                .await
                .with_context(|| format!("failed to get payment {}", id))?;
            print_payments(std::slice::from_ref(&payment), format)
        }
    }
}

async fn run_list(args: &PaymentsListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    args.paging.validate()?;

    let resp = if let Some(order_id) = &args.order_id {
        client
            .list_order_payments(order_id)
            .await
            .with_context(|| format!("failed to list payments for order {}", order_id))?
    } else {
        let mut query = PaymentQuery::default();
        if let Some(status) = &args.status {
            query = query.with_status(status);
        }
        if let Some(gateway) = &args.gateway {
            query = query.with_gateway(gateway);
        }
        fetch_list(&args.paging, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.list_payments(&query).await }
        })
        .await
        .context("failed to list payments")?
    };

    print_page_summary(&resp, "payments");
    print_payments(&resp.items, format)
}
