//! Page request parameters for list endpoints.

use thiserror::Error;

/// Validation errors raised by [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Pages are 1-indexed.
    #[error("page must be at least 1")]
    ZeroPage,
    /// Empty pages cannot be requested.
    #[error("per_page must be at least 1")]
    ZeroPerPage,
}

/// A 1-indexed page request.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let first = PageRequest::default();
/// assert_eq!((first.page(), first.per_page()), (1, 10));
/// assert_eq!(first.next().page(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is zero.
    pub const fn new(page: u32, per_page: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if per_page == 0 {
            return Err(PageRequestError::ZeroPerPage);
        }
        Ok(Self { page, per_page })
    }

    /// Requested page, 1-indexed.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Request for the following page with the same size.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }

    /// Query parameters in wire order: `page`, then `per_page`.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero_page(0, 10, PageRequestError::ZeroPage)]
    #[case::zero_size(1, 0, PageRequestError::ZeroPerPage)]
    fn rejects_zero_values(#[case] page: u32, #[case] per_page: u32, #[case] expected: PageRequestError) {
        assert_eq!(PageRequest::new(page, per_page), Err(expected));
    }

    #[test]
    fn query_pairs_use_wire_names() {
        let request = PageRequest::new(2, 25).expect("valid request");
        assert_eq!(
            request.query_pairs(),
            [("page", "2".to_owned()), ("per_page", "25".to_owned())]
        );
    }
}
