use serde::Serialize;

/// Default number of rows rendered per page in list views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Number of page links shown on each side of the current page.
const PAGE_WINDOW: usize = 2;

/// Page request passed down to repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        ((self.page.max(1) - 1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// A page of items together with the page links to render.
///
/// `pages` holds page numbers with `None` marking an elided range, so the
/// template can render `1 … 4 5 6 … 12`.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        let page = page.max(1);
        Self {
            items,
            page,
            total_pages,
            pages: page_links(page, total_pages),
        }
    }

    /// Build a page from a repository `(total, items)` pair.
    pub fn from_total(items: Vec<T>, page: usize, total: usize, per_page: usize) -> Self {
        Self::new(items, page, total.div_ceil(per_page.max(1)))
    }
}

fn page_links(page: usize, total_pages: usize) -> Vec<Option<usize>> {
    let mut links = Vec::new();
    let mut previous = 0;

    for candidate in 1..=total_pages {
        let near_current = candidate + PAGE_WINDOW >= page && candidate <= page + PAGE_WINDOW;
        if candidate == 1 || candidate == total_pages || near_current {
            if previous != 0 && candidate > previous + 1 {
                links.push(None);
            }
            links.push(Some(candidate));
            previous = candidate;
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_for_first_page() {
        let pagination = Pagination {
            page: 1,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), 0);

        let pagination = Pagination {
            page: 0,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn page_links_elide_distant_pages() {
        let page: Paginated<i32> = Paginated::new(Vec::new(), 6, 12);

        assert_eq!(
            page.pages,
            vec![
                Some(1),
                None,
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                None,
                Some(12)
            ]
        );
    }

    #[test]
    fn from_total_rounds_up() {
        let page: Paginated<i32> = Paginated::from_total(vec![1, 2], 1, 41, 20);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn empty_result_has_no_links() {
        let page: Paginated<i32> = Paginated::from_total(Vec::new(), 1, 0, 20);

        assert_eq!(page.total_pages, 0);
        assert!(page.pages.is_empty());
    }
}
