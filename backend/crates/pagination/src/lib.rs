//! Response envelope and pagination primitives for the fleet API.
//!
//! Every upstream response body is wrapped in one of two shapes:
//!
//! - [`Envelope`] for single resources and command results;
//! - [`PaginatedEnvelope`] for list endpoints, carrying page cursors.
//!
//! Both shapes report a business outcome through `success`, independent of
//! the HTTP status that carried them. A `200 OK` may still hold
//! `success: false` when the upstream rejects a request on domain grounds.
//!
//! [`PageRequest`] models the 1-indexed `page`/`per_page` query parameters
//! accepted by list endpoints.
//!
//! ```
//! use pagination::{Envelope, PaginatedEnvelope, PageRequest};
//!
//! let single: Envelope<u32> = Envelope::ok(7);
//! assert_eq!(single.data(), Some(&7));
//!
//! let page = PaginatedEnvelope::page_of(vec!["a", "b"], 1, 2, 3);
//! assert!(page.has_more);
//! assert_eq!(page.next_page, Some(2));
//!
//! let request = PageRequest::new(2, 10).expect("valid page request");
//! assert_eq!(request.query_pairs()[0], ("page", "2".to_owned()));
//! ```

mod envelope;
mod page;

pub use envelope::{BusinessFailure, Envelope, PaginatedEnvelope};
pub use page::{PageRequest, PageRequestError};
