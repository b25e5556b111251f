//! Host-facing search scope for gitscope.
//!
//! Turns a host request (query text, department, optional repository) into
//! categorised results, and a selected result into a preview.
//!
//! - [`query`]: [`SearchQuery`] runs one request against the API client
//! - [`preview`]: layouts and widgets for a single result
//! - [`reply`]: the presentation model and the [`SearchReply`] /
//!   [`PreviewReply`] sinks a host implements
//! - [`describe`]: card description text
//! - [`templates`]: category renderer templates

pub mod department;
pub mod describe;
pub mod preview;
pub mod query;
pub mod reply;
pub mod templates;

pub use department::Department;
pub use preview::build_preview;
pub use query::{SearchQuery, SearchRequest};
pub use reply::{
    CategorisedResult, Category, CategoryRenderer, CollectedReply, ColumnLayout, PreviewReply,
    PreviewWidget, SearchReply,
};
