//! Ticketforge Domain Layer
//!
//! This crate contains the record types shared by all other layers:
//! the ticket backend's issue model and the field-descriptor traits
//! that make those records addressable by dot-separated field paths.
//!
//! ## Key Concepts
//!
//! - **Issue**: a single ticket as the backend returns it
//! - **SearchResults**: the paginated envelope around a list of issues
//! - **Projectable**: a record that exposes a compile-time descriptor
//!   table (declared name, serialization alias, excluded flag) so that
//!   callers can address its members without runtime reflection
//!
//! Infrastructure (HTTP, config, rendering) lives in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod issue;
pub mod traits;

// Re-exports for convenience
pub use issue::{Issue, IssueFields, IssueType, SearchResults, Status};
pub use traits::{FieldDescriptor, Member, Projectable};
