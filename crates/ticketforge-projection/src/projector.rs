//! Apply the resolver across a record collection.

use crate::resolver::resolve_path;
use indexmap::IndexMap;
use serde_json::Value;
use ticketforge_domain::Projectable;

/// One record's projection: requested path → resolved value, in the
/// caller's requested order. Paths that did not resolve are present
/// with an explicit null, distinguishing "absent" from "present but
/// empty".
pub type ProjectedRecord = IndexMap<String, Value>;

/// Project every record over the requested paths.
///
/// `paths` must already be comma-split, trimmed, and emptied of blank
/// entries by the caller. Each record projects independently; a path
/// that fails to resolve never aborts the remaining paths or records.
pub fn project_records<T: Projectable>(records: &[T], paths: &[String]) -> Vec<ProjectedRecord> {
    records
        .iter()
        .map(|record| {
            let mut projection = ProjectedRecord::with_capacity(paths.len());
            for path in paths {
                let value = resolve_path(record, path).unwrap_or(Value::Null);
                projection.insert(path.clone(), value);
            }
            projection
        })
        .collect()
}
