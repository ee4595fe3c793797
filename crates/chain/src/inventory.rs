use sn_types::RawOwnedObject;

use sui_sdk_types::Address;

use crate::{ChainError, OwnedObjectsFetcher};

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub page_size: usize,
    /// Upper bound on fetched pages; `None` follows the cursor until the end.
    pub max_pages: Option<usize>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: None,
        }
    }
}

/// Fetches every object owned by `owner`, following the continuation cursor.
///
/// Pages are concatenated in the order the node returns them. Any page failure
/// aborts the whole inventory; no partial result is returned.
pub async fn fetch_all_owned_objects<F>(
    fetcher: &F,
    owner: &Address,
    options: PaginationOptions,
) -> Result<Vec<RawOwnedObject>, ChainError>
where
    F: OwnedObjectsFetcher + ?Sized,
{
    let mut objects = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        if options.max_pages.is_some_and(|max| pages >= max) {
            return Err(ChainError::Pagination(format!(
                "more than {pages} pages of owned objects"
            )));
        }

        let page = fetcher
            .owned_objects_page(owner, cursor.take(), options.page_size)
            .await?;
        pages += 1;
        log::debug!("page {pages}: {} objects", page.data.len());

        objects.extend(page.data);

        if !page.has_next_page {
            break;
        }
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(ChainError::Pagination(
                    "node reported another page without a cursor".to_string(),
                ))
            }
        }
    }

    Ok(objects)
}
