// ABOUTME: Fixed GraphQL query documents and the request variants that select them
// ABOUTME: Pairs each operation with its variable shape, ready for transport

use serde::Serialize;
use serde_json::json;

use crate::identifier::IssueRef;

const QUERY_ISSUE_BY_ID: &str = r#"
query IssueDetail($issueId: String!, $includeDetails: Boolean = false) {
  issue(id: $issueId) {
    id
    identifier
    title
    description
    url
    priority
    dueDate
    state {
      name
      type
    }
    labels {
      nodes {
        name
      }
    }
    assignee {
      name
      email
    }
    project {
      name
      url
    }
    updatedAt
    comments @include(if: $includeDetails) {
      nodes {
        id
        body
        user {
          name
        }
        createdAt
      }
    }
    attachments @include(if: $includeDetails) {
      nodes {
        id
        title
        url
        createdAt
      }
    }
  }
}
"#;

const QUERY_ISSUE_BY_IDENTIFIER: &str = r#"
query IssueByIdentifier($teamKey: String!, $number: Float!, $includeDetails: Boolean = false) {
  issues(filter: { number: { eq: $number }, team: { key: { eq: $teamKey } } }) {
    nodes {
      id
      identifier
      title
      description
      url
      priority
      dueDate
      state {
        name
        type
      }
      labels {
        nodes {
          name
        }
      }
      assignee {
        name
        email
      }
      project {
        name
        url
      }
      updatedAt
      comments @include(if: $includeDetails) {
        nodes {
          id
          body
          user {
            name
          }
          createdAt
        }
      }
      attachments @include(if: $includeDetails) {
        nodes {
          id
          title
          url
          createdAt
        }
      }
    }
  }
}
"#;

const QUERY_PROJECT: &str = r#"
query ProjectDetail($projectId: String!, $first: Int = 50) {
  project(id: $projectId) {
    id
    name
    description
    url
    state
    lead {
      name
    }
    targetDate
    updatedAt
    issues(first: $first, orderBy: updatedAt) {
      nodes {
        id
        identifier
        title
        url
        priority
        state {
          name
          type
        }
        assignee {
          name
        }
        updatedAt
      }
    }
  }
}
"#;

const QUERY_TEAM: &str = r#"
query TeamIssues($teamId: String!, $first: Int = 50) {
  team(id: $teamId) {
    id
    name
    key
    issues(first: $first, orderBy: updatedAt) {
      nodes {
        id
        identifier
        title
        url
        priority
        state {
          name
          type
        }
        assignee {
          name
        }
        updatedAt
      }
    }
  }
}
"#;

/// One request to the Linear API: a query document plus its variables.
///
/// The fixed operations form a closed set; `Custom` carries a user-authored
/// document and arbitrary variables straight through.
#[derive(Debug, Clone)]
pub enum QueryRequest {
    IssueById {
        issue_id: String,
        include_details: bool,
    },
    IssueByIdentifier {
        issue: IssueRef,
        include_details: bool,
    },
    ProjectDetail {
        project_id: String,
        first: i32,
    },
    TeamIssues {
        team_id: String,
        first: i32,
    },
    Custom {
        document: String,
        variables: serde_json::Value,
    },
}

impl QueryRequest {
    /// The GraphQL document for this request.
    pub fn document(&self) -> &str {
        match self {
            QueryRequest::IssueById { .. } => QUERY_ISSUE_BY_ID,
            QueryRequest::IssueByIdentifier { .. } => QUERY_ISSUE_BY_IDENTIFIER,
            QueryRequest::ProjectDetail { .. } => QUERY_PROJECT,
            QueryRequest::TeamIssues { .. } => QUERY_TEAM,
            QueryRequest::Custom { document, .. } => document,
        }
    }

    /// The variables object for this request.
    pub fn variables(&self) -> serde_json::Value {
        match self {
            QueryRequest::IssueById {
                issue_id,
                include_details,
            } => json!({
                "issueId": issue_id,
                "includeDetails": include_details,
            }),
            // The upstream schema types the sequence number as a Float
            QueryRequest::IssueByIdentifier {
                issue,
                include_details,
            } => json!({
                "teamKey": issue.team_key,
                "number": (issue.number as f64),
                "includeDetails": include_details,
            }),
            QueryRequest::ProjectDetail { project_id, first } => json!({
                "projectId": project_id,
                "first": first,
            }),
            QueryRequest::TeamIssues { team_id, first } => json!({
                "teamId": team_id,
                "first": first,
            }),
            QueryRequest::Custom { variables, .. } => variables.clone(),
        }
    }

    /// Bind document and variables into the wire envelope.
    pub fn envelope(&self) -> QueryEnvelope {
        QueryEnvelope {
            query: self.document().to_string(),
            variables: self.variables(),
        }
    }
}

/// The serialized POST body: `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryEnvelope {
    pub query: String,
    pub variables: serde_json::Value,
}
