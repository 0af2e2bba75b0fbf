//! Pagination loop shared by the scan and list sources.

use std::future::Future;

use envdump_core::pagination::PagePolicy;
use envdump_core::Result;

/// One page of results and the token for the next one, if the service
/// reported more.
#[derive(Debug)]
pub struct Page<T, K> {
    pub items: Vec<T>,
    pub next: Option<K>,
}

/// Items gathered across pages.
#[derive(Debug)]
pub struct Collected<T> {
    pub items: Vec<T>,
    /// The page policy stopped before the service ran out of pages.
    pub truncated: bool,
}

/// Requests pages until the service stops returning a token or the page
/// policy says stop. `fetch` receives the token of the previous page
/// (`None` for the first request).
pub async fn collect_pages<T, K, F, Fut>(
    page_policy: PagePolicy,
    mut fetch: F,
) -> Result<Collected<T>>
where
    F: FnMut(Option<K>) -> Fut,
    Fut: Future<Output = Result<Page<T, K>>>,
{
    let mut items = Vec::new();
    let mut token = None;

    loop {
        let page = fetch(token.take()).await?;
        items.extend(page.items);

        if page_policy.truncated(page.next.as_ref()) {
            return Ok(Collected {
                items,
                truncated: true,
            });
        }
        if !page_policy.should_continue(page.next.as_ref()) {
            break;
        }
        token = page.next;
    }

    Ok(Collected {
        items,
        truncated: false,
    })
}
