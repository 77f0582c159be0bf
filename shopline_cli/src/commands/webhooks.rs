use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shopline_api::{Client, Query, WebhookQuery};

use super::{fetch_list, PageArgs};
use crate::output::{print_page_summary, print_webhooks, OutputFormat};

#[derive(Args)]
pub struct WebhooksArgs {
    #[command(subcommand)]
    pub command: WebhooksCommand,
}

#[derive(Subcommand)]
pub enum WebhooksCommand {
    /// List webhook subscriptions
    List(WebhooksListArgs),
    /// Show one webhook
    Get {
        /// Webhook ID
        id: String,
    },
    /// Delete a webhook
    Delete {
        /// Webhook ID
        id: String,
    },
}

#[derive(Args)]
pub struct WebhooksListArgs {
    #[command(flatten)]
    pub paging: PageArgs,

    /// Filter by topic (e.g. orders/create)
    #[arg(long)]
    pub topic: Option<String>,

    /// Filter by delivery address
    #[arg(long)]
    pub address: Option<String>,
}

pub async fn run(args: &WebhooksArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        WebhooksCommand::List(list) => {
            list.paging.validate()?;
            let mut query = WebhookQuery::default();
            if let Some(topic) = &list.topic {
                query = query.with_topic(topic);
            }
            if let Some(address) = &list.address {
                query = query.with_address(address);
            }
            let resp = fetch_list(&list.paging, |page, size| {
                let query = query.clone().with_page(page).with_page_size(size);
                async move { client.list_webhooks(&query).await }
            })
            .await
            .context("failed to list webhooks")?;

            print_page_summary(&resp, "webhooks");
            print_webhooks(&resp.items, format)
        }
        WebhooksCommand::Get { id } => {
            let webhook = client
                .get_webhook(id)
                .await
                .with_context(|| format!("failed to get webhook {}", id))?;
            print_webhooks(std::slice::from_ref(&webhook), format)
        }
        WebhooksCommand::Delete { id } => {
            client
                .delete_webhook(id)
                .await
                .with_context(|| format!("failed to delete webhook {}", id))?;
            eprintln!("Webhook {} deleted", id);
            Ok(())
        }
    }
}
