//! Collects items across consecutive list pages.

use std::future::Future;

use crate::types::ListResponse;

/// Fetches pages starting at `start_page` until `limit` items are collected
/// or the server reports no further pages.
///
/// Collection also stops once `pagination.total_pages` is reached, or when
/// the server reports an earlier page than the one requested. Items of such
/// a repeated page are not collected again.
///
/// `fetch` receives `(page, page_size)`. A `limit` of zero or less means no
/// limit; `start_page` below 1 starts at page 1. The first error returned by
/// `fetch` is passed through unchanged and nothing collected so far is kept.
///
/// The returned envelope carries the items, trimmed to `limit`, along with
/// the metadata of the last page fetched. `has_more` is set when items were
/// trimmed or the last page reported more.
pub async fn fetch_pages<T, E, F, Fut>(
    start_page: i64,
    page_size: i64,
    limit: i64,
    mut fetch: F,
) -> Result<ListResponse<T>, E>
where
    F: FnMut(i64, i64) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>, E>>,
{
    let limit = usize::try_from(limit).ok().filter(|l| *l > 0);
    let mut page = start_page.max(1);
    let mut items = Vec::new();

    let last = loop {
        let mut resp = fetch(page, page_size).await?;
        tracing::debug!(page, count = resp.items.len(), has_more = resp.has_more, "fetched page");
        if resp.page > 0 && resp.page < page {
            tracing::warn!(requested = page, reported = resp.page, "page did not advance, stopping");
            break resp;
        }
        let got = resp.items.len();
        items.append(&mut resp.items);

        let reached_limit = limit.is_some_and(|l| items.len() >= l);
        let total_pages = resp.pagination.total_pages;
        let past_last_page = total_pages > 0 && page >= total_pages;
        if reached_limit || !resp.has_more || got == 0 || past_last_page {
            break resp;
        }
        page += 1;
    };

    let mut trimmed = false;
    if let Some(limit) = limit {
        if items.len() > limit {
            items.truncate(limit);
            trimmed = true;
        }
    }

    Ok(ListResponse {
        items,
        pagination: last.pagination,
        page: if last.page > 0 { last.page } else { page },
        page_size: last.page_size,
        total_count: last.total_count,
        has_more: trimmed || last.has_more,
    })
}
