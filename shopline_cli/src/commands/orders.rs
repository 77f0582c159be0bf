use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shopline_api::{Client, OrderQuery, OrderSearchQuery, Query};

use super::{fetch_list, parse_date, sort_order, PageArgs};
use crate::output::{print_order, print_orders, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List or search orders
    List(OrdersListArgs),
    /// Show one order with its line items
    Get {
        /// Order ID
        id: String,
    },
    /// Cancel an order
    Cancel {
        /// Order ID
        id: String,
    },
}

#[derive(Args)]
pub struct OrdersListArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    /// Free-text search; switches to the search endpoint
    #[arg(long)]
    pub query: Option<String>,

    /// Filter by order status (e.g. pending, confirmed, completed, cancelled)
    #[arg(long)]
    pub status: Option<String>,

    /// Created on or after (RFC3339 or YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Created on or before (RFC3339 or YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Sort field (e.g. created_at, updated_at)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

pub async fn run(args: &OrdersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        OrdersCommand::List(list) => run_list(list, client, format).await,
        OrdersCommand::Get { id } => {
            let order = client
                .get_order(id)
                .await
                .with_context(|| format!("failed to get order {}", id))?;
            print_order(&order, format)
        }
        OrdersCommand::Cancel { id } => {
            client
                .cancel_order(id)
                .await
                .with_context(|| format!("failed to cancel order {}", id))?;
            eprintln!("Order {} cancelled", id);
            Ok(())
        }
    }
}

async fn run_list(args: &OrdersListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    args.paging.validate()?;
    let since = args.since.as_deref().map(|s| parse_date(s, "since")).transpose()?;
    let until = args.until.as_deref().map(|s| parse_date(s, "until")).transpose()?;

    let resp = if let Some(text) = &args.query {
        let mut query = OrderSearchQuery::default().with_query(text);
        if let Some(status) = &args.status {
            query = query.with_status(status);
        }
        if let Some(since) = since {
            query = query.with_since(since);
        }
        if let Some(until) = until {
            query = query.with_until(until);
        }
        fetch_list(&args.paging, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.search_orders(&query).await }
        })
        .await
        .context("failed to search orders")?
    } else {
        let mut query = OrderQuery::default();
        if let Some(status) = &args.status {
            query = query.with_status(status);
        }
        if let Some(since) = since {
            query = query.with_since(since);
        }
        if let Some(until) = until {
            query = query.with_until(until);
        }
        if let Some(sort_by) = &args.sort_by {
            query = query.with_sort_by(sort_by);
        }
        if let Some(order) = sort_order(args.sort_by.as_deref(), args.desc) {
            query = query.with_sort_order(order);
        }
        fetch_list(&args.paging, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.list_orders(&query).await }
        })
        .await
        .context("failed to list orders")?
    };

    print_page_summary(&resp, "orders");
    print_orders(&resp.items, format)
}
