//! Pagination calculator
//!
//! Given the filtered rows, a page size, and a requested page, computes
//! the clamped page, that page's row slice, and the pager metadata: the
//! total page count, a fixed-width window of page numbers around the
//! current page, and the human-readable range label.

/// Number of page buttons shown around the current page.
pub const PAGE_WINDOW: usize = 5;

/// Pager metadata for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    /// Requested page clamped into `1..=total_pages`.
    pub current_page: usize,
    /// Always at least 1, even for an empty collection.
    pub total_pages: usize,
    /// First page number shown in the pager, inclusive.
    pub window_start: usize,
    /// Last page number shown in the pager, inclusive.
    pub window_end: usize,
    /// Whether the first/previous buttons are enabled.
    pub has_prev: bool,
    /// Whether the next/last buttons are enabled.
    pub has_next: bool,
    /// `"0 resultados"` or `"Showing {start}–{end} of {total}"`.
    pub range_label: String,
}

/// One page of rows plus its pager metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub pager: Pager,
}

/// Slice the given rows into the requested page.
///
/// The requested page may be anything; it is clamped into range. The
/// window keeps its full width of [`PAGE_WINDOW`] whenever there are at
/// least that many pages, shifting at the boundaries instead of
/// shrinking.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = rows.len();
    let total_pages = (total.div_ceil(page_size)).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total);
    let page_rows = if start < end {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    // Center the window on the current page, then shift it back into
    // range so it never shrinks below its width unnecessarily.
    let window_end = (current_page.saturating_sub(PAGE_WINDOW / 2).max(1) + PAGE_WINDOW - 1)
        .min(total_pages);
    let window_start = window_end
        .saturating_sub(PAGE_WINDOW - 1)
        .max(1);

    let range_label = if total == 0 {
        "0 resultados".to_string()
    } else {
        format!("Showing {}–{} of {}", start + 1, end, total)
    };

    Page {
        rows: page_rows,
        pager: Pager {
            current_page,
            total_pages,
            window_start,
            window_end,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
            range_label,
        },
    }
}
