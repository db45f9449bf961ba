//! Response envelope normalization.
//!
//! The admin service wraps list payloads inconsistently: the same endpoint
//! may answer with a bare array, `{"data": [...]}`, or a resource-keyed
//! object like `{"admins": [...]}` depending on backend version. Each
//! resource declares an ordered rule list and the first matching rule
//! wins; when nothing matches the result is an empty vector, never null.
//!
//! The probe order is a compatibility policy, not a discovered invariant:
//! it must stay stable for the deployed backends, so treat reordering as a
//! breaking change.

use serde_json::Value;

/// One step of an envelope probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractRule {
    /// The body itself is the list.
    BareArray,
    /// The list sits under this top-level field.
    Field(&'static str),
}

/// Apply `rules` in order against a decoded response body and return the
/// first list found. A `Field` rule matches only when the field is present
/// *and* holds an array; anything else falls through to the next rule.
///
/// Order and length of the contained list are preserved unchanged. When no
/// rule matches the result is empty, so downstream iteration is always
/// unconditional.
#[must_use]
pub fn extract_list(body: &Value, rules: &[ExtractRule]) -> Vec<Value> {
    for rule in rules {
        match rule {
            ExtractRule::BareArray => {
                if let Some(items) = body.as_array() {
                    return items.clone();
                }
            }
            ExtractRule::Field(name) => {
                if let Some(items) = body.get(name).and_then(Value::as_array) {
                    return items.clone();
                }
            }
        }
    }
    Vec::new()
}

/// Ordered JSON paths where login responses have been observed to carry
/// the access token. First non-empty string wins.
const TOKEN_PATHS: &[&[&str]] = &[
    &["data", "tokens", "accessToken"],
    &["token"],
    &["accessToken"],
];

/// Probe a login response body for the access token.
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    TOKEN_PATHS.iter().find_map(|path| {
        let mut node = body;
        for key in *path {
            node = node.get(key)?;
        }
        node.as_str()
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[ExtractRule] = &[
        ExtractRule::BareArray,
        ExtractRule::Field("admins"),
        ExtractRule::Field("data"),
    ];

    #[test]
    fn test_bare_array() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let items = extract_list(&body, RULES);
        assert_eq!(items.len(), 3);
        assert_eq!(items.first().and_then(|v| v.get("id")), Some(&json!(1)));
        assert_eq!(items.last().and_then(|v| v.get("id")), Some(&json!(3)));
    }

    #[test]
    fn test_resource_keyed_envelope() {
        let body = json!({"admins": [{"id": "a"}, {"id": "b"}]});
        let items = extract_list(&body, RULES);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_data_envelope() {
        let body = json!({"data": [{"id": "a"}]});
        assert_eq!(extract_list(&body, RULES).len(), 1);
    }

    #[test]
    fn test_resource_field_wins_over_data() {
        let body = json!({
            "admins": [{"id": "from-admins"}],
            "data": [{"id": "from-data"}, {"id": "extra"}]
        });
        let items = extract_list(&body, RULES);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items.first().and_then(|v| v.get("id")),
            Some(&json!("from-admins"))
        );
    }

    #[test]
    fn test_non_array_field_falls_through() {
        let body = json!({"admins": "not a list", "data": [{"id": "a"}]});
        assert_eq!(extract_list(&body, RULES).len(), 1);
    }

    #[test]
    fn test_unknown_shape_yields_empty() {
        for body in [
            json!({"message": "hello"}),
            json!("just a string"),
            json!(42),
            json!(null),
            json!({}),
        ] {
            assert!(extract_list(&body, RULES).is_empty());
        }
    }

    #[test]
    fn test_order_preserved() {
        let body = json!({"data": [3, 1, 2]});
        assert_eq!(extract_list(&body, RULES), vec![json!(3), json!(1), json!(2)]);
    }

    #[test]
    fn test_token_nested_path() {
        let body = json!({"data": {"tokens": {"accessToken": "abc"}}});
        assert_eq!(extract_token(&body).as_deref(), Some("abc"));
    }

    #[test]
    fn test_token_flat_token_field() {
        let body = json!({"token": "flat"});
        assert_eq!(extract_token(&body).as_deref(), Some("flat"));
    }

    #[test]
    fn test_token_access_token_only() {
        let body = json!({"accessToken": "bare"});
        assert_eq!(extract_token(&body).as_deref(), Some("bare"));
    }

    #[test]
    fn test_token_nested_wins_over_flat() {
        let body = json!({
            "data": {"tokens": {"accessToken": "nested"}},
            "token": "flat"
        });
        assert_eq!(extract_token(&body).as_deref(), Some("nested"));
    }

    #[test]
    fn test_token_empty_string_skipped() {
        let body = json!({"token": "", "accessToken": "fallback"});
        assert_eq!(extract_token(&body).as_deref(), Some("fallback"));
    }

    #[test]
    fn test_token_missing() {
        assert!(extract_token(&json!({"message": "welcome"})).is_none());
    }
}
