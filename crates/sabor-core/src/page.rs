use serde::{Deserialize, Serialize};

/// A list response together with the backend's total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total reported by the backend, or the item count when it sends none.
    pub total: u64,
}

impl<T> Page<T> {
    /// Build a page, falling back to the number of items when `total` is absent.
    #[must_use]
    pub fn new(items: Vec<T>, total: Option<u64>) -> Self {
        let total = total.unwrap_or_else(|| u64::try_from(items.len()).unwrap_or(u64::MAX));
        Self { items, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert every item, keeping `total`.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Convert every item, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            total: self.total,
        })
    }

    /// Keep at most `limit` items. `total` is left untouched.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.items.truncate(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_defaults_to_item_count() {
        let page = Page::new(vec![1, 2, 3], None);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn explicit_total_wins() {
        let page = Page::new(vec![1, 2], Some(40));
        assert_eq!(page.total, 40);
    }

    #[test]
    fn try_map_stops_at_first_error() {
        let page = Page::new(vec!["1", "x", "3"], None);
        assert!(page.try_map(str::parse::<u8>).is_err());
    }

    #[test]
    fn truncation_keeps_total() {
        let page = Page::new(vec![1, 2, 3, 4], Some(10)).truncated(2);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 10);
    }
}
