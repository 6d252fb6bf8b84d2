//! Wire types for the ticket backend.

use serde::{Deserialize, Serialize};

/// Request to create a new issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    /// Target project key, e.g. `WEB`.
    #[serde(rename = "projectKey")]
    pub project_key: String,
    /// One-line summary.
    pub summary: String,
    /// Long-form description.
    pub description: String,
    /// Issue type name, e.g. `Task`.
    #[serde(rename = "issueType")]
    pub issue_type: String,
}

/// Response to a successful issue creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatedIssue {
    /// Key of the new issue.
    pub key: String,
    /// Backend-internal id.
    pub id: String,
    /// Canonical URL of the new issue.
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Request to search issues.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Backend query string.
    pub query: String,
    /// Maximum number of results to return.
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// Offset of the first result.
    #[serde(rename = "startAt", skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u32>,
}

/// Error payload the backend returns on failure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_aliases() {
        let request = CreateIssueRequest {
            project_key: "WEB".to_string(),
            summary: "Fix login".to_string(),
            description: String::new(),
            issue_type: "Bug".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["projectKey"], "WEB");
        assert_eq!(json["issueType"], "Bug");
    }

    #[test]
    fn test_search_request_omits_absent_pagination() {
        let request = SearchRequest {
            query: "project = WEB".to_string(),
            max_results: None,
            start_at: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("maxResults").is_none());
        assert!(json.get("startAt").is_none());
    }
}
