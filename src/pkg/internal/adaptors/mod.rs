use serde::Serialize;

use crate::conf::settings;

pub mod applications;
pub mod jobs;
pub mod profiles;
pub mod shortlists;

/// Listing envelope shared by every paginated read.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: i64, total: i64) -> Self {
        let has_more = page.max(0) * settings.page_size + (items.len() as i64) < total;
        Page {
            items,
            has_more,
            total,
        }
    }
}

pub fn limit_offset(page: i64) -> (i64, i64) {
    (settings.page_size, page.max(0) * settings.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_math() {
        let full: Page<i32> = Page::new((0..10).collect(), 0, 25);
        assert!(full.has_more);
        assert_eq!(full.total, 25);

        let last: Page<i32> = Page::new((0..5).collect(), 2, 25);
        assert!(!last.has_more);

        let empty: Page<i32> = Page::new(vec![], 0, 0);
        assert!(!empty.has_more);
    }

    #[test]
    fn test_negative_page_clamped() {
        let (limit, offset) = limit_offset(-3);
        assert_eq!(limit, settings.page_size);
        assert_eq!(offset, 0);
    }
}
