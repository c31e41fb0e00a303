//! Envelope shapes shared by every fleet API response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 10;
const UNSPECIFIED_FAILURE: &str = "request was not successful";

/// Business failure reported inside an envelope with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BusinessFailure {
    /// Upstream message, or a generic description when none was supplied.
    pub message: String,
}

/// Wrapper for non-paginated responses.
///
/// ## Invariants
/// - `data` is only meaningful when `success` is true, yet consumers must
///   still null-check it: command endpoints such as deletes succeed without a
///   payload.
///
/// # Examples
/// ```
/// use pagination::Envelope;
///
/// let failed: Envelope<()> = Envelope::failure("Vehicle not found");
/// assert!(!failed.is_success());
/// assert_eq!(failed.message.as_deref(), Some("Vehicle not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Upstream-reported outcome, independent of the HTTP status code.
    pub success: bool,
    /// Human-readable detail; present on failures, optional on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload, absent for failures and for endpoints without content.
    /// Missing fields already decode as `None`; a `default` attribute here
    /// would force `T: Default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Build a successful envelope carrying `data`.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Build a successful envelope with both a payload and a message.
    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Build a failed envelope with the supplied message and no payload.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Return whether the upstream reported success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Split the envelope into its payload or its business failure.
    ///
    /// A successful envelope without data yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`BusinessFailure`] when `success` is false.
    pub fn into_result(self) -> Result<Option<T>, BusinessFailure> {
        if self.success {
            Ok(self.data)
        } else {
            Err(BusinessFailure {
                message: self
                    .message
                    .unwrap_or_else(|| UNSPECIFIED_FAILURE.to_owned()),
            })
        }
    }
}

/// Wrapper for list responses.
///
/// ## Invariants
/// - `data.len() <= per_page`
/// - `has_more == (page < total_pages)`
/// - `next_page` is `None` iff `has_more` is false, otherwise `page + 1`.
///
/// Values received from the upstream are not validated on decode; use
/// [`PaginatedEnvelope::is_consistent`] to check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    /// Upstream-reported outcome.
    pub success: bool,
    /// Human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Items in server-determined order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Number of items in this page, not the overall total.
    #[serde(default)]
    pub count: u32,
    /// Echo of the requested page, 1-indexed.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Echo of the requested page size.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Total number of pages available.
    #[serde(default)]
    pub total_pages: u32,
    /// Whether a later page exists.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the following page.
    #[serde(default)]
    pub next_page: Option<u32>,
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

const fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl<T> PaginatedEnvelope<T> {
    /// Build a successful page, deriving `count`, `has_more` and `next_page`.
    ///
    /// # Examples
    /// ```
    /// use pagination::PaginatedEnvelope;
    ///
    /// let last = PaginatedEnvelope::page_of(vec![1, 2], 3, 10, 3);
    /// assert!(!last.has_more);
    /// assert_eq!(last.next_page, None);
    /// ```
    #[must_use]
    pub fn page_of(items: Vec<T>, page: u32, per_page: u32, total_pages: u32) -> Self {
        let has_more = page < total_pages;
        Self {
            success: true,
            message: None,
            count: u32::try_from(items.len()).unwrap_or(u32::MAX),
            data: items,
            page,
            per_page,
            total_pages,
            has_more,
            next_page: next_page_after(page, has_more),
        }
    }

    /// Build a failed list response with no items.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Vec::new(),
            count: 0,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            total_pages: 0,
            has_more: false,
            next_page: None,
        }
    }

    /// Return whether the cursor fields agree with each other and the items.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let within_page = usize::try_from(self.per_page).is_ok_and(|limit| self.data.len() <= limit);
        let count_matches = usize::try_from(self.count).is_ok_and(|count| count == self.data.len());
        let has_more_matches = self.has_more == (self.page < self.total_pages);
        let cursor_matches = self.next_page == next_page_after(self.page, self.has_more);
        within_page && count_matches && has_more_matches && cursor_matches
    }

    /// Return whether this is the final page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_more
    }

    /// Consume the envelope and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data
    }
}

fn next_page_after(page: u32, has_more: bool) -> Option<u32> {
    if has_more { page.checked_add(1) } else { None }
}
