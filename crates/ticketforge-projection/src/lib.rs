//! Ticketforge Projection
//!
//! Path-addressed field extraction over the domain's record types.
//!
//! # Overview
//!
//! The resolver walks one dot-separated path against one record,
//! matching each segment case-insensitively against the record's
//! descriptor table (declared names first, serialization aliases
//! second) or against the keys of a string-keyed dictionary. Absence
//! is an ordinary outcome, never an error.
//!
//! The projector applies the resolver across a record collection and a
//! requested field list, producing one insertion-ordered map per
//! record in which every requested path is present — resolved to its
//! value, or to an explicit null.
//!
//! ```
//! use ticketforge_domain::{Issue, IssueFields, IssueType, Status};
//! use ticketforge_projection::resolve_path;
//!
//! let issue = Issue {
//!     key: "WEB-1".to_string(),
//!     id: "1".to_string(),
//!     self_url: "https://tickets.example.com/issue/1".to_string(),
//!     fields: IssueFields {
//!         summary: "Fix login".to_string(),
//!         status: Status { name: "Open".to_string() },
//!         issue_type: IssueType { name: "Bug".to_string() },
//!         description: None,
//!     },
//! };
//!
//! let value = resolve_path(&issue, "fields.status.name");
//! assert_eq!(value, Some(serde_json::json!("Open")));
//! ```

#![warn(missing_docs)]

mod projector;
mod resolver;

pub use projector::{project_records, ProjectedRecord};
pub use resolver::resolve_path;
