// ABOUTME: Decoded-response handling: upstream error surfacing and issue disambiguation
// ABOUTME: Resolves identifier lookups to exactly one match or fails descriptively

use serde_json::Value;

use crate::error::FetchError;

/// Fail when a decoded response carries a non-empty top-level error list.
///
/// The failure message joins each error's `message` field with `; `,
/// defaulting to `Unknown error` where absent.
pub fn raise_on_errors(response: &Value) -> Result<(), FetchError> {
    let Some(errors) = response.get("errors").and_then(Value::as_array) else {
        return Ok(());
    };
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|error| {
            error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
        })
        .collect::<Vec<_>>()
        .join("; ");

    Err(FetchError::GraphQL(message))
}

/// Resolve an identifier lookup's `data.issues.nodes` list to exactly one
/// node.
///
/// Zero matches is a not-found error naming the original identifier; more
/// than one (team-key collisions, duplicate numbers upstream) lists every
/// matched identifier and points the caller at the direct-id path.
pub fn single_identifier_match<'a>(
    response: &'a Value,
    identifier: &str,
) -> Result<&'a Value, FetchError> {
    let nodes = response
        .pointer("/data/issues/nodes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    match nodes {
        [] => Err(FetchError::IssueNotFound(identifier.to_string())),
        [node] => Ok(node),
        matches => {
            let identifiers = matches
                .iter()
                .map(|node| {
                    node.get("identifier")
                        .and_then(Value::as_str)
                        .unwrap_or("?")
                })
                .collect::<Vec<_>>()
                .join(", ");
            Err(FetchError::AmbiguousIdentifier(identifiers))
        }
    }
}
