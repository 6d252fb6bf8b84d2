//! Issue records as the ticket backend encodes them.
//!
//! Each record type registers a descriptor table mirroring its serde
//! attributes so field paths like `fields.status.name` resolve without
//! runtime reflection.

use crate::traits::{FieldDescriptor, Member, Projectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single ticket as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. `WEB-42`.
    pub key: String,
    /// Backend-internal numeric id.
    pub id: String,
    /// Canonical URL of the issue.
    #[serde(rename = "self")]
    pub self_url: String,
    /// Core issue fields.
    pub fields: IssueFields,
}

/// The core fields of an [`Issue`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueFields {
    /// One-line summary.
    pub summary: String,
    /// Workflow status.
    pub status: Status,
    /// Issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType,
    /// Optional long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    /// Status name, e.g. `In Progress`.
    pub name: String,
}

/// Type of an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueType {
    /// Type name, e.g. `Bug`.
    pub name: String,
}

/// Paginated search result envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Offset of the first returned issue.
    #[serde(rename = "startAt")]
    pub start_at: u32,
    /// Page size the backend applied.
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    /// Total number of matches.
    pub total: u32,
    /// The returned issues.
    pub issues: Vec<Issue>,
}

fn encoded(record: &impl Serialize) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

const ISSUE_DESCRIPTORS: &[FieldDescriptor] = &[
    FieldDescriptor::new("key", "key"),
    FieldDescriptor::new("id", "id"),
    FieldDescriptor::new("self_url", "self"),
    FieldDescriptor::new("fields", "fields"),
];

impl Projectable for Issue {
    fn descriptors(&self) -> &'static [FieldDescriptor] {
        ISSUE_DESCRIPTORS
    }

    fn member(&self, index: usize) -> Member<'_> {
        match index {
            0 => Member::Value(Value::String(self.key.clone())),
            1 => Member::Value(Value::String(self.id.clone())),
            2 => Member::Value(Value::String(self.self_url.clone())),
            3 => Member::Record(&self.fields),
            _ => Member::Absent,
        }
    }

    fn to_value(&self) -> Value {
        encoded(self)
    }
}

const ISSUE_FIELDS_DESCRIPTORS: &[FieldDescriptor] = &[
    FieldDescriptor::new("summary", "summary"),
    FieldDescriptor::new("status", "status"),
    FieldDescriptor::new("issue_type", "issuetype"),
    FieldDescriptor::new("description", "description"),
];

impl Projectable for IssueFields {
    fn descriptors(&self) -> &'static [FieldDescriptor] {
        ISSUE_FIELDS_DESCRIPTORS
    }

    fn member(&self, index: usize) -> Member<'_> {
        match index {
            0 => Member::Value(Value::String(self.summary.clone())),
            1 => Member::Record(&self.status),
            2 => Member::Record(&self.issue_type),
            3 => match &self.description {
                Some(text) => Member::Value(Value::String(text.clone())),
                None => Member::Absent,
            },
            _ => Member::Absent,
        }
    }

    fn to_value(&self) -> Value {
        encoded(self)
    }
}

const NAME_ONLY_DESCRIPTORS: &[FieldDescriptor] = &[FieldDescriptor::new("name", "name")];

impl Projectable for Status {
    fn descriptors(&self) -> &'static [FieldDescriptor] {
        NAME_ONLY_DESCRIPTORS
    }

    fn member(&self, index: usize) -> Member<'_> {
        match index {
            0 => Member::Value(Value::String(self.name.clone())),
            _ => Member::Absent,
        }
    }

    fn to_value(&self) -> Value {
        encoded(self)
    }
}

impl Projectable for IssueType {
    fn descriptors(&self) -> &'static [FieldDescriptor] {
        NAME_ONLY_DESCRIPTORS
    }

    fn member(&self, index: usize) -> Member<'_> {
        match index {
            0 => Member::Value(Value::String(self.name.clone())),
            _ => Member::Absent,
        }
    }

    fn to_value(&self) -> Value {
        encoded(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue() -> Issue {
        Issue {
            key: "WEB-42".to_string(),
            id: "10042".to_string(),
            self_url: "https://tickets.example.com/issue/10042".to_string(),
            fields: IssueFields {
                summary: "Fix login redirect".to_string(),
                status: Status {
                    name: "In Progress".to_string(),
                },
                issue_type: IssueType {
                    name: "Bug".to_string(),
                },
                description: None,
            },
        }
    }

    #[test]
    fn test_issue_round_trip_uses_aliases() {
        let issue = sample_issue();
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(json["self"], issue.self_url.as_str());
        assert_eq!(json["fields"]["issuetype"]["name"], "Bug");
        // Absent description is omitted entirely
        assert!(json["fields"].get("description").is_none());

        let back: Issue = serde_json::from_value(json).unwrap();
        assert_eq!(back.key, "WEB-42");
        assert_eq!(back.fields.issue_type.name, "Bug");
    }

    #[test]
    fn test_descriptor_tables_match_serde_attributes() {
        let mut issue = sample_issue();
        issue.fields.description = Some("details".to_string());
        let json = serde_json::to_value(&issue).unwrap();

        for descriptor in issue.descriptors() {
            assert!(
                json.get(descriptor.alias).is_some(),
                "alias '{}' missing from encoded issue",
                descriptor.alias
            );
        }
        for descriptor in issue.fields.descriptors() {
            assert!(
                json["fields"].get(descriptor.alias).is_some(),
                "alias '{}' missing from encoded fields",
                descriptor.alias
            );
        }
    }

    #[test]
    fn test_absent_description_is_absent_member() {
        let issue = sample_issue();
        assert!(matches!(issue.fields.member(3), Member::Absent));

        let mut with_description = issue;
        with_description.fields.description = Some("details".to_string());
        match with_description.fields.member(3) {
            Member::Value(Value::String(text)) => assert_eq!(text, "details"),
            _ => panic!("expected string member"),
        }
    }

    #[test]
    fn test_search_results_envelope_aliases() {
        let results = SearchResults {
            start_at: 0,
            max_results: 20,
            total: 1,
            issues: vec![sample_issue()],
        };
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["startAt"], 0);
        assert_eq!(json["maxResults"], 20);
        assert_eq!(json["issues"].as_array().unwrap().len(), 1);
    }
}
