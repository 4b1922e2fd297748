//! Cursor pagination walker for Flock collection endpoints
//!
//! Every Flock list endpoint reports its continuation as a `links.next`
//! URL. The walker turns such an endpoint into either a fully
//! materialized collection ([`fetch_all`]) or a lazy stream ([`stream`]),
//! hiding the next-link mechanics from callers. Both variants are generic
//! over the page-fetch function, so the walk logic is tested without any
//! HTTP.
//!
//! The walker performs zero retries: whatever error the page-fetch
//! function raises is surfaced at the point in the walk where it occurs.

use std::collections::VecDeque;
use std::future::Future;

use futures::stream::Stream;

use flocktools_core::envelope::Page;

use crate::error::ApiError;

/// Cursor state for one walk
enum Cursor {
    Pending(String),
    Exhausted,
}

fn validate_endpoint(endpoint: &str) -> Result<(), ApiError> {
    if endpoint.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "empty endpoint for page walk".to_string(),
        ));
    }
    Ok(())
}

/// Walk every page starting at `start`, concatenating items in page order.
///
/// Terminates when a page reports no next link. A failed page fetch
/// aborts the walk and surfaces the error; no partial collection is
/// returned. An empty start endpoint fails before any fetch is issued.
pub async fn fetch_all<T, F, Fut>(
    mut fetch_page: F,
    start: impl Into<String>,
) -> Result<Vec<T>, ApiError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let start = start.into();
    validate_endpoint(&start)?;

    let mut items = Vec::new();
    let mut next = Some(start);

    while let Some(url) = next {
        let page = fetch_page(url).await?;
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}

/// Walk pages lazily, yielding items in the same order as [`fetch_all`].
///
/// The next page is not fetched until the consumer polls past the current
/// page's buffer, so dropping the stream early issues no further
/// requests. Empty non-terminal pages are skipped without yielding. Each
/// call starts a fresh walk from `start`; nothing is shared between
/// walks.
pub fn stream<T, F, Fut>(
    fetch_page: F,
    start: impl Into<String>,
) -> impl Stream<Item = Result<T, ApiError>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let start = start.into();

    futures::stream::try_unfold(
        (VecDeque::new(), Cursor::Pending(start), fetch_page),
        |(mut buffer, mut cursor, mut fetch_page)| async move {
            loop {
                if let Some(item) = buffer.pop_front() {
                    return Ok(Some((item, (buffer, cursor, fetch_page))));
                }

                match std::mem::replace(&mut cursor, Cursor::Exhausted) {
                    Cursor::Exhausted => return Ok(None),
                    Cursor::Pending(url) => {
                        validate_endpoint(&url)?;
                        let page = fetch_page(url).await?;
                        buffer = page.items.into();
                        if let Some(next) = page.next {
                            cursor = Cursor::Pending(next);
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::cell::Cell;
    use std::pin::pin;
    use std::rc::Rc;

    enum Fixture {
        Page(Page<u32>),
        Fail,
    }

    fn page(items: &[u32], next: Option<&str>) -> Fixture {
        Fixture::Page(Page {
            items: items.to_vec(),
            next: next.map(String::from),
            total_count: None,
        })
    }

    /// Page-fetch function backed by a url -> fixture table, counting calls
    fn fetch_from(
        table: Vec<(&'static str, Fixture)>,
    ) -> (
        impl FnMut(String) -> futures::future::Ready<Result<Page<u32>, ApiError>>,
        Rc<Cell<usize>>,
    ) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let fetch = move |url: String| {
            counter.set(counter.get() + 1);
            let result = table
                .iter()
                .find(|(key, _)| *key == url)
                .map(|(_, fixture)| match fixture {
                    Fixture::Page(page) => Ok(page.clone()),
                    Fixture::Fail => Err(ApiError::Network("connection reset".to_string())),
                })
                .unwrap_or_else(|| {
                    Err(ApiError::InvalidArgument(format!("no fixture for {}", url)))
                });
            futures::future::ready(result)
        };

        (fetch, calls)
    }

    fn three_pages() -> Vec<(&'static str, Fixture)> {
        vec![
            ("/w", page(&[1, 2], Some("/w?o=2"))),
            ("/w?o=2", page(&[3, 4], Some("/w?o=4"))),
            ("/w?o=4", page(&[5], None)),
        ]
    }

    #[tokio::test]
    async fn test_fetch_all_concatenates_pages_in_order() {
        let (fetch, calls) = fetch_from(three_pages());

        let items = fetch_all(fetch, "/w").await.unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_fetch_all_zero_pages() {
        let (fetch, calls) = fetch_from(vec![("/empty", page(&[], None))]);

        let items = fetch_all(fetch, "/empty").await.unwrap();

        assert!(items.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_propagates_error_and_stops() {
        let (fetch, calls) = fetch_from(vec![
            ("/w", page(&[1, 2], Some("/w?o=2"))),
            ("/w?o=2", Fixture::Fail),
            ("/w?o=4", page(&[5], None)),
        ]);

        let result = fetch_all(fetch, "/w").await;

        assert!(matches!(result, Err(ApiError::Network(_))));
        // No page-3 fetch after the failure
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_rejects_empty_start() {
        let (fetch, calls) = fetch_from(three_pages());

        let result = fetch_all(fetch, "").await;

        assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_stream_matches_fetch_all_order() {
        let (fetch, _) = fetch_from(three_pages());
        let (fetch2, _) = fetch_from(three_pages());

        let all = fetch_all(fetch, "/w").await.unwrap();
        let streamed: Vec<u32> = stream(fetch2, "/w")
            .map(|item| item.unwrap())
            .collect()
            .await;

        assert_eq!(streamed, all);
    }

    #[tokio::test]
    async fn test_stream_is_lazy() {
        let (fetch, calls) = fetch_from(three_pages());

        let mut items = pin!(stream(fetch, "/w"));
        let first = items.next().await.unwrap().unwrap();

        assert_eq!(first, 1);
        // Only page 1 was fetched to satisfy the first item
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_stream_dropped_early_stops_fetching() {
        let (fetch, calls) = fetch_from(three_pages());

        {
            let mut items = pin!(stream(fetch, "/w"));
            assert_eq!(items.next().await.unwrap().unwrap(), 1);
            assert_eq!(items.next().await.unwrap().unwrap(), 2);
        }

        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_stream_surfaces_error_after_buffer() {
        let (fetch, calls) = fetch_from(vec![
            ("/w", page(&[1, 2], Some("/w?o=2"))),
            ("/w?o=2", Fixture::Fail),
        ]);

        let mut items = pin!(stream(fetch, "/w"));

        assert_eq!(items.next().await.unwrap().unwrap(), 1);
        assert_eq!(items.next().await.unwrap().unwrap(), 2);
        assert!(matches!(
            items.next().await,
            Some(Err(ApiError::Network(_)))
        ));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_stream_zero_pages() {
        let (fetch, calls) = fetch_from(vec![("/empty", page(&[], None))]);

        let mut items = pin!(stream(fetch, "/empty"));

        assert!(items.next().await.is_none());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_stream_skips_empty_intermediate_pages() {
        let (fetch, calls) = fetch_from(vec![
            ("/w", page(&[], Some("/w?o=0"))),
            ("/w?o=0", page(&[7], None)),
        ]);

        let items: Vec<u32> = stream(fetch, "/w").map(|item| item.unwrap()).collect().await;

        assert_eq!(items, vec![7]);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_stream_rejects_empty_start_before_fetching() {
        let (fetch, calls) = fetch_from(three_pages());

        let mut items = pin!(stream(fetch, "  "));

        assert!(matches!(
            items.next().await,
            Some(Err(ApiError::InvalidArgument(_)))
        ));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_stream_restarts_are_independent_walks() {
        let (fetch1, calls1) = fetch_from(three_pages());
        let (fetch2, calls2) = fetch_from(three_pages());

        let first: Vec<u32> = stream(fetch1, "/w").map(|item| item.unwrap()).collect().await;
        let second: Vec<u32> = stream(fetch2, "/w").map(|item| item.unwrap()).collect().await;

        assert_eq!(first, second);
        assert_eq!(calls1.get(), 3);
        assert_eq!(calls2.get(), 3);
    }

    #[tokio::test]
    async fn test_two_page_example() {
        let (fetch, calls) = fetch_from(vec![
            ("/x", page(&[1, 2], Some("/x?o=2"))),
            ("/x?o=2", page(&[3], None)),
        ]);

        let items = fetch_all(fetch, "/x").await.unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(calls.get(), 2);
    }
}
