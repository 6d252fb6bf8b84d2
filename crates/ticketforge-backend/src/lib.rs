//! Ticketforge Backend Client
//!
//! JSON-over-HTTP client for the ticket backend's search and create
//! operations. The backend's record encoding is defined in
//! `ticketforge-domain`; this crate owns only the wire requests, the
//! transport, and the error taxonomy around them.

#![warn(missing_docs)]

mod client;
mod error;
mod types;

pub use client::BackendClient;
pub use error::BackendError;
pub use types::{CreateIssueRequest, CreatedIssue, ErrorResponse, SearchRequest};
