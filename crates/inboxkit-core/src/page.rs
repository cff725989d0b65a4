use crate::record::Record;

/// One page of a projected list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    pub items: Vec<&'a R>,
    /// Zero-based page index after clamping.
    pub page: usize,
    pub page_count: usize,
    /// Rows across all pages.
    pub total: usize,
}

impl<'a, R: Record> Page<'a, R> {
    /// Ids on this page, for "select all on current page".
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.items.iter().map(|&r| r.id())
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}

/// Slice a projection into pages. Out-of-range pages clamp to the last one;
/// a page size of zero is treated as one.
pub fn paginate<'a, R>(list: &[&'a R], page: usize, page_size: usize) -> Page<'a, R> {
    let page_size = page_size.max(1);
    let total = list.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total);
    Page {
        items: list[start.min(total)..end].to_vec(),
        page,
        page_count,
        total,
    }
}
