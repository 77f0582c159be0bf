use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shopline_api::{Client, Query, ShipmentQuery};

use super::{fetch_list, PageArgs};
use crate::output::{print_page_summary, print_shipments, OutputFormat};

#[derive(Args)]
pub struct ShipmentsArgs {
    #[command(subcommand)]
    pub command: ShipmentsCommand,
}

#[derive(Subcommand)]
pub enum ShipmentsCommand {
    /// List shipments
    List(ShipmentsListArgs),
    /// Show one shipment
    Get {
        /// Shipment ID
        id: String,
    },
}

#[derive(Args)]
pub struct ShipmentsListArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    /// Filter by order ID
    #[arg(long)]
    pub order_id: Option<String>,

    /// Filter by fulfillment ID
    #[arg(long)]
    pub fulfillment_id: Option<String>,

    /// Filter by status
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by tracking number
    #[arg(long)]
    pub tracking_number: Option<String>,
}

pub async fn run(args: &ShipmentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ShipmentsCommand::List(list) => run_list(list, client, format).await,
        ShipmentsCommand::Get { id } => {
            let shipment = client
                .get_shipment(id)
                .await
                .with_context(|| format!("failed to get shipment {}", id))?;
            print_shipments(std::slice::from_ref(&shipment), format)
        }
    }
}

async fn run_list(args: &ShipmentsListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    args.paging.validate()?;

    let mut query = ShipmentQuery::default();
    if let Some(order_id) = &args.order_id {
        query = query.with_order_id(order_id);
    }
    if let Some(fulfillment_id) = &args.fulfillment_id {
        query = query.with_fulfillment_id(fulfillment_id);
    }
    if let Some(status) = &args.status {
        query = query.with_status(status);
    }
    if let Some(tracking_number) = &args.tracking_number {
        query = query.with_tracking_number(tracking_number);
    }

    let resp = fetch_list(&args.paging, |page, size| {
        let query = query.clone().with_page(page).with_page_size(size);
        async move { client.list_shipments(&query).await }
    })
    .await
    .context("failed to list shipments")?;

    print_page_summary(&resp, "shipments");
    print_shipments(&resp.items, format)
}
