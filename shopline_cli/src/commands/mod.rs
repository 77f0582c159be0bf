//! CLI subcommand implementations.

pub mod customers;
pub mod merchant;
pub mod orders;
pub mod payments;
pub mod shipments;
pub mod webhooks;

use std::future::Future;

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use shopline_api::paginate::fetch_pages;
use shopline_api::types::ListResponse;
use shopline_api::{Error, SortOrder};

/// Paging flags shared by every `list` subcommand.
#[derive(Args, Clone, Debug)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Collect up to this many results across pages (0 fetches a single page)
    #[arg(long, default_value = "0")]
    pub limit: i64,
}

impl PageArgs {
    pub fn validate(&self) -> Result<()> {
        if self.limit < 0 {
            bail!("limit must be >= 0");
        }
        if self.page_size < 0 {
            bail!("page-size must be >= 0");
        }
        Ok(())
    }
}

/// Fetches one page, or pages until `--limit` results are collected.
pub async fn fetch_list<T, F, Fut>(paging: &PageArgs, mut fetch: F) -> Result<ListResponse<T>, Error>
where
    F: FnMut(i64, i64) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>, Error>>,
{
    if paging.limit > 0 {
        fetch_pages(paging.page, paging.page_size, paging.limit, fetch).await
    } else {
        fetch(paging.page, paging.page_size).await
    }
}

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(value: &str, label: &str) -> Result<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Ok(t.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(d) => Ok(d.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()),
        Err(e) => bail!("invalid {label} date format, use RFC3339 or YYYY-MM-DD: {e}"),
    }
}

/// `--desc` picks descending order; otherwise ascending once a sort field is given.
pub fn sort_order(sort_by: Option<&str>, desc: bool) -> Option<SortOrder> {
    match sort_by {
        Some(s) if !s.is_empty() => Some(if desc { SortOrder::Desc } else { SortOrder::Asc }),
        _ => None,
    }
}
