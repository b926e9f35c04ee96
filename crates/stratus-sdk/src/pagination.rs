// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Page-token pagination for list operations.

use crate::WireEnum;
use crate::error::Result;
use crate::response::Response;

/// Sort direction accepted by list operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum SortOrder {
    #[wire(value = "ASC")]
    Asc,
    #[wire(value = "DESC")]
    Desc,
    #[wire(unknown)]
    UnknownValue(String),
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the next page; `None` on the last page.
    pub next_page: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page: Option<String>) -> Self {
        Self { items, next_page }
    }

    /// Take the items and the `opc-next-page` header from a list response.
    pub fn from_response(response: Response<Vec<T>>) -> Self {
        let next_page = response.next_page().map(str::to_string);
        Self {
            items: response.data,
            next_page,
        }
    }
}

/// Lazily walks pages, starting from the first.
///
/// `fetch` receives the page token (`None` for the first page).
pub struct Paginator<T, F>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    fetch: F,
    next: Option<String>,
    done: bool,
}

impl<T, F> Paginator<T, F>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            next: None,
            done: false,
        }
    }
}

impl<T, F> Iterator for Paginator<T, F>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    type Item = Result<Page<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.fetch)(self.next.take()) {
            Ok(page) => {
                self.next = page.next_page.clone();
                self.done = self.next.is_none();
                Some(Ok(page))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Fetch every page and concatenate the items.
pub fn list_all<T, F>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    let mut items = Vec::new();
    for page in Paginator::new(fetch) {
        items.extend(page?.items);
    }
    Ok(items)
}

/// Fetch pages until at least `limit` items were seen; returns at most `limit`.
pub fn list_up_to<T, F>(limit: usize, fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Result<Page<T>>,
{
    let mut items = Vec::new();
    if limit == 0 {
        return Ok(items);
    }
    for page in Paginator::new(fetch) {
        items.extend(page?.items);
        if items.len() >= limit {
            items.truncate(limit);
            break;
        }
    }
    Ok(items)
}
