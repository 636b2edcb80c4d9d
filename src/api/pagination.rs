// src/api/pagination.rs
//! Offset pagination over list APIs as a lazy, finite stream of pages.

use super::HacoCmsRepository;
use crate::error::AppError;
use crate::model::{ListQuery, PageResponse};
use crate::types::Endpoint;
use futures::Stream;

/// Position within a paginated list.
///
/// Offsets advance by the requested limit: `0, limit, 2*limit, ...`.
/// Iteration ends once the records seen reach `meta.total`, or on an empty
/// page, whichever comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    limit: u32,
    offset: u64,
    fetched: u64,
    exhausted: bool,
}

impl PageCursor {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            offset: 0,
            fetched: 0,
            exhausted: false,
        }
    }

    /// Query for the next page, or `None` once the list is consumed.
    pub fn next_query(&self) -> Option<ListQuery> {
        if self.exhausted {
            None
        } else {
            Some(ListQuery::new(self.limit, self.offset))
        }
    }

    /// Records seen so far.
    pub fn fetched(&self) -> u64 {
        self.fetched
    }

    /// Moves past `page`.
    pub fn advance(&mut self, page: &PageResponse) {
        self.fetched += page.data.len() as u64;

        if page.meta.offset != self.offset {
            log::warn!(
                "Requested offset {} but API reported offset {}",
                self.offset,
                page.meta.offset
            );
        }

        if page.meta.limit < u64::from(self.limit) {
            log::warn!(
                "Requested limit {} but API reported limit {}; records may be skipped",
                self.limit,
                page.meta.limit
            );
        }

        if page.is_empty() && self.fetched < page.meta.total {
            log::warn!(
                "Empty page at offset {} although total is {}; stopping",
                self.offset,
                page.meta.total
            );
        }

        if page.is_empty() || self.fetched >= page.meta.total {
            self.exhausted = true;
        } else {
            self.offset += u64::from(self.limit);
        }
    }
}

/// Every page of `endpoint`, requested one at a time.
///
/// Nothing is fetched until the stream is polled, and the next request is
/// only issued after the previous page has been yielded. An error ends the
/// stream.
pub fn list_pages<'a, R>(
    repository: &'a R,
    endpoint: &'a Endpoint,
    limit: u32,
) -> impl Stream<Item = Result<PageResponse, AppError>> + 'a
where
    R: HacoCmsRepository + ?Sized,
{
    futures::stream::try_unfold(PageCursor::new(limit), move |mut cursor| async move {
        let Some(query) = cursor.next_query() else {
            return Ok(None);
        };

        log::debug!(
            "Fetching {} (limit {}, offset {})",
            endpoint,
            query.limit,
            query.offset
        );
        let page = repository.get_list(endpoint, &query).await?;
        cursor.advance(&page);
        Ok::<_, AppError>(Some((page, cursor)))
    })
}
