//! Page arithmetic for listing. Pages are numbered from 1.

use std::ops::Range;

/// Positions covered by `page`, clipped to `len`.
///
/// Returns `None` for page 0, or for a page that starts at or past the end.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Option<Range<usize>> {
    let start = page.checked_sub(1)?.checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(page_size).min(len);
    Some(start..end)
}

/// Number of pages needed for `len` entries; an empty list has no pages.
pub fn page_count(page_size: usize, len: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
