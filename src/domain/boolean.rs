//! Boolean domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named boolean flag, the sole persisted resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boolean {
    /// Server-minted identifier, immutable after creation
    pub id: Uuid,
    /// Arbitrary caller-supplied label, no uniqueness constraint
    pub key: String,
    pub value: bool,
}

/// Caller-supplied fields for create and update requests.
///
/// Deliberately has no `id` field: identifiers are minted server-side on
/// create and forced to the path parameter on update, so an `id` embedded
/// in a request body is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BooleanInput {
    pub key: String,
    pub value: bool,
}

impl BooleanInput {
    /// Materialize the input into a full record under the given identifier.
    pub fn into_boolean(self, id: Uuid) -> Boolean {
        Boolean {
            id,
            key: self.key,
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ignores_embedded_id() {
        let input: BooleanInput = serde_json::from_str(
            r#"{"id":"6f2b2f3e-8f6a-4a1e-9d6c-1f2e3d4c5b6a","key":"demo key","value":true}"#,
        )
        .expect("unknown fields are dropped");

        assert_eq!(input.key, "demo key");
        assert!(input.value);
    }

    #[test]
    fn input_rejects_wrong_types() {
        // Scenario: {"key": false, "value": 22}
        let result = serde_json::from_str::<BooleanInput>(r#"{"key":false,"value":22}"#);
        assert!(result.is_err());
    }

    #[test]
    fn input_requires_both_fields() {
        assert!(serde_json::from_str::<BooleanInput>(r#"{"key":"only"}"#).is_err());
        assert!(serde_json::from_str::<BooleanInput>(r#"{"value":true}"#).is_err());
    }

    #[test]
    fn into_boolean_attaches_id() {
        let id = Uuid::new_v4();
        let input = BooleanInput {
            key: "k".to_string(),
            value: false,
        };

        let boolean = input.into_boolean(id);
        assert_eq!(boolean.id, id);
        assert_eq!(boolean.key, "k");
        assert!(!boolean.value);
    }

    #[test]
    fn boolean_serializes_all_fields() {
        let boolean = Boolean {
            id: Uuid::nil(),
            key: "demo key".to_string(),
            value: true,
        };

        let json = serde_json::to_value(&boolean).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "key": "demo key",
                "value": true,
            })
        );
    }
}
