//! Page windowing over ordered results

/// Number of records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The `page` query parameter.
///
/// Kept as raw text so that a non-numeric value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn new(page: i64) -> Self {
        Self {
            page: Some(page.to_string()),
        }
    }

    /// Pick `page` out of decoded query pairs. When repeated, the first value wins.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| *key == "page")
                .map(|(_, value)| value.to_string()),
        }
    }

    /// Requested page number, `1` when absent or not an integer.
    pub fn number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Return the window `[(page - 1) * page_size, page * page_size)` of `items`,
/// clipped to its bounds.
///
/// Page numbers below one are not rejected; no window can start before the
/// first record, so they produce an empty slice.
pub fn paginate<T>(page: i64, page_size: usize, items: &[T]) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_size));
    let Some(start) = start else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
