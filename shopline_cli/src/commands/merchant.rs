use anyhow::{Context, Result};
use shopline_api::Client;

use crate::output::{print_merchant, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let merchant = client
        .get_merchant()
        .await
        .context("failed to get merchant")?;
    tracing::debug!(merchant_id = %merchant.id, "resolved merchant");
    print_merchant(&merchant, format)
}
