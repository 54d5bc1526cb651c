//! Content validation errors.
//!
//! Components themselves never fail. These errors are raised by the content
//! boundary ([`crate::types::ContentList::new`],
//! [`crate::types::SiteContent::validate`]) before anything is rendered.

use thiserror::Error;

/// Malformed or ambiguous landing page content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Two content items share an id; tiles are keyed by id.
    #[error("duplicate content id '{id}' at positions {first} and {second}")]
    DuplicateId {
        /// The repeated id
        id: String,
        /// Position of the first occurrence
        first: usize,
        /// Position of the repeated occurrence
        second: usize,
    },

    /// A content item has an empty id.
    #[error("content item at position {index} has an empty id")]
    EmptyId {
        /// Position of the offending item
        index: usize,
    },

    /// A content item has an empty title.
    #[error("content item '{id}' has an empty title")]
    EmptyTitle {
        /// Id of the offending item
        id: String,
    },

    /// Two navigation entries share an id.
    #[error("duplicate navigation id '{0}'")]
    DuplicateNavId(String),
}
