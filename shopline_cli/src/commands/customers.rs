use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shopline_api::{Client, CustomerQuery, CustomerSearchQuery, Query};

use super::{fetch_list, sort_order, PageArgs};
use crate::output::{print_customers, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Subcommand)]
pub enum CustomersCommand {
    /// List or search customers
    List(CustomersListArgs),
    /// Show one customer
    Get {
        /// Customer ID
        id: String,
    },
}

#[derive(Args)]
pub struct CustomersListArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    /// Free-text search; switches to the search endpoint
    #[arg(long)]
    pub query: Option<String>,

    /// Filter by email
    #[arg(long)]
    pub email: Option<String>,

    /// Filter by phone (search only)
    #[arg(long)]
    pub phone: Option<String>,

    /// Filter by account state
    #[arg(long)]
    pub state: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Filter by marketing consent
    #[arg(long)]
    pub accepts_marketing: Option<bool>,

    /// Sort field
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

pub async fn run(args: &CustomersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        CustomersCommand::List(list) => run_list(list, client, format).await,
        CustomersCommand::Get { id } => {
            let customer = client
                .get_customer(id)
                .await
                .with_context(|| format!("failed to get customer {}", id))?;
            print_customers(std::slice::from_ref(&customer), format)
        }
    }
}

async fn run_list(args: &CustomersListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    args.paging.validate()?;

    let searching = args.query.is_some() || args.phone.is_some();
    let resp = if searching {
        let mut query = CustomerSearchQuery::default();
        if let Some(text) = &args.query {
            query = query.with_query(text);
        }
        if let Some(email) = &args.email {
            query = query.with_email(email);
        }
        if let Some(phone) = &args.phone {
            query = query.with_phone(phone);
        }
        fetch_list(&args.paging, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.search_customers(&query).await }
        })
        .await
        .context("failed to search customers")?
    } else {
        let mut query = CustomerQuery::default();
        if let Some(email) = &args.email {
            query = query.with_email(email);
        }
        if let Some(state) = &args.state {
            query = query.with_state(state);
        }
        if let Some(tags) = &args.tags {
            query = query.with_tags(tags);
        }
        if let Some(accepts) = args.accepts_marketing {
            query = query.with_accepts_marketing(accepts);
        }
        if let Some(sort_by) = &args.sort_by {
            query = query.with_sort_by(sort_by);
        }
        if let Some(order) = sort_order(args.sort_by.as_deref(), args.desc) {
            query = query.with_sort_order(order);
        }
        fetch_list(&args.paging, |page, size| {
            let query = query.clone().with_page(page).with_page_size(size);
            async move { client.list_customers(&query).await }
        })
        .await
        .context("failed to list customers")?
    };

    print_page_summary(&resp, "customers");
    print_customers(&resp.items, format)
}
