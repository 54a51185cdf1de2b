//! The repository content query used by file-presence policies.

use crate::ports::GraphqlRequest;
use anyhow::Context;
use orgguard_types::ids;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

/// Text of the blob at `$expression` (`<ref>:<path>`) in `$owner/$name`.
pub const BLOB_TEXT_QUERY: &str = "query($owner: String!, $name: String!, $expression: String!) {
  repository(owner: $owner, name: $name) {
    object(expression: $expression) {
      ... on Blob {
        text
      }
    }
  }
}";

/// Request the text of `path` at the repository's default reference.
pub fn blob_text_request(owner: &str, name: &str, path: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: BLOB_TEXT_QUERY,
        variables: json!({
            "owner": owner,
            "name": name,
            "expression": format!("{}:{}", ids::DEFAULT_REF, path),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct BlobTextData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    object: Option<ObjectNode>,
}

#[derive(Debug, Deserialize)]
struct ObjectNode {
    #[serde(default)]
    text: Option<String>,
}

/// Extract the blob text from a [`BLOB_TEXT_QUERY`] response.
///
/// A missing repository, a missing object, a non-blob object, or a binary blob all
/// yield the empty string.
pub fn decode_blob_text(data: JsonValue) -> anyhow::Result<String> {
    let data: BlobTextData =
        serde_json::from_value(data).context("unexpected blob text response shape")?;
    Ok(data
        .repository
        .and_then(|r| r.object)
        .and_then(|o| o.text)
        .unwrap_or_default())
}
