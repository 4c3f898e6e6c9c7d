//! Request bodies for alert-mutating calls.
//!
//! Every mutating call carries the acting user and the tool `source` so the
//! Opsgenie audit log can attribute the change.
//!
//! Tag removal has no body: the removal endpoint takes its fields as query
//! parameters, so it is modeled by [`RemoveTagsParams`] instead of a payload.

use serde::{Deserialize, Serialize};

/// Body of acknowledge, un-acknowledge, close, and add-note calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPayload {
    pub user: String,
    pub source: String,
    pub note: String,
}

/// Body of the add-tags call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPayload {
    pub user: String,
    pub source: String,
    pub note: String,
    /// Tags in caller order.
    pub tags: Vec<String>,
}

/// Flat parameters of the remove-tags call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTagsParams {
    pub identifier: String,
    pub user: String,
    pub source: String,
    pub tags: Vec<String>,
    pub note: String,
}

impl RemoveTagsParams {
    /// Query pairs as sent on the wire (`tags` comma-joined).
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("user".to_string(), self.user.clone()),
            ("source".to_string(), self.source.clone()),
            ("tags".to_string(), self.tags.join(",")),
            ("note".to_string(), self.note.clone()),
        ]
    }
}

impl From<&RemoveTagsParams> for TagPayload {
    fn from(params: &RemoveTagsParams) -> Self {
        Self {
            user: params.user.clone(),
            source: params.source.clone(),
            note: params.note.clone(),
            tags: params.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_payload_serializes_three_fields() {
        let payload = ActionPayload {
            user: "jdoe".to_string(),
            source: "TyGenie 0.1.0".to_string(),
            note: "on it".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"user": "jdoe", "source": "TyGenie 0.1.0", "note": "on it"})
        );
    }

    #[test]
    fn test_remove_tags_query_joins_tags_in_order() {
        let params = RemoveTagsParams {
            identifier: "abc".to_string(),
            user: "jdoe".to_string(),
            source: "TyGenie 0.1.0".to_string(),
            tags: vec!["b".to_string(), "a".to_string()],
            note: String::new(),
        };
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("tags".to_string(), "b,a".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "identifier"));
    }
}
