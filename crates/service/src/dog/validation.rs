//! Payload checks run before any write reaches the store.
//!
//! Both checks take the raw JSON body, accept any shape, and return one
//! message per problem (empty when the body passes).

use serde_json::Value;

/// Keys a dog payload may carry.
pub const ALLOWED_KEYS: [&str; 4] = ["name", "age", "breed", "description"];

#[derive(Clone, Copy)]
enum Expected {
    String,
    Number,
}

impl Expected {
    fn matches(self, value: Option<&Value>) -> bool {
        match self {
            Expected::String => matches!(value, Some(Value::String(_))),
            Expected::Number => matches!(value, Some(Value::Number(_))),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Expected::String => "a string",
            Expected::Number => "a number",
        }
    }
}

// Message order follows this table.
const FIELDS: [(&str, Expected); 4] = [
    ("name", Expected::String),
    ("age", Expected::Number),
    ("description", Expected::String),
    ("breed", Expected::String),
];

/// Type-check the four required fields.
///
/// A missing field or explicit `null` fails its check; a body that is not an
/// object fails all four.
pub fn check_input(input: &Value) -> Vec<String> {
    FIELDS
        .iter()
        .filter(|(field, expected)| !expected.matches(input.get(*field)))
        .map(|(field, expected)| format!("{} should be {}", field, expected.label()))
        .collect()
}

/// Reject every own key outside [`ALLOWED_KEYS`], in the body's key order.
pub fn validate_keys(input: &Value) -> Vec<String> {
    own_keys(input)
        .into_iter()
        .filter(|key| !ALLOWED_KEYS.contains(&key.as_str()))
        .map(|key| format!("'{}' is not a valid key", key))
        .collect()
}

/// Full check for create: type errors first, then key errors.
pub fn validate_new_dog(input: &Value) -> Vec<String> {
    let mut errors = check_input(input);
    errors.extend(validate_keys(input));
    errors
}

// Arrays expose their indices as keys; scalars have none.
fn own_keys(input: &Value) -> Vec<String> {
    match input {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_passes_both_checks() {
        let dog = json!({"name": "Rex", "description": "good boy", "age": 3, "breed": "Lab"});
        assert!(check_input(&dog).is_empty());
        assert!(validate_keys(&dog).is_empty());
        assert!(validate_new_dog(&dog).is_empty());
    }

    #[test]
    fn fractional_age_is_still_a_number() {
        let dog = json!({"name": "Rex", "description": "d", "age": 2.5, "breed": "Lab"});
        assert!(check_input(&dog).is_empty());
    }

    #[test]
    fn type_errors_follow_declaration_order() {
        let dog = json!({"breed": 1, "description": null, "age": "3", "name": false});
        assert_eq!(
            check_input(&dog),
            vec![
                "name should be a string",
                "age should be a number",
                "description should be a string",
                "breed should be a string",
            ]
        );
    }

    #[test]
    fn missing_fields_fail_type_check() {
        let dog = json!({"name": "Rex"});
        assert_eq!(
            check_input(&dog),
            vec![
                "age should be a number",
                "description should be a string",
                "breed should be a string",
            ]
        );
    }

    #[test]
    fn non_object_fails_every_field() {
        assert_eq!(check_input(&json!("dog")).len(), 4);
        assert_eq!(check_input(&Value::Null).len(), 4);
        assert_eq!(check_input(&json!([1, 2])).len(), 4);
    }

    #[test]
    fn unknown_keys_keep_body_order() {
        let dog = json!({"zeta": 1, "name": "Rex", "alpha": 2, "color": "brown"});
        assert_eq!(
            validate_keys(&dog),
            vec![
                "'zeta' is not a valid key",
                "'alpha' is not a valid key",
                "'color' is not a valid key",
            ]
        );
    }

    #[test]
    fn array_indices_are_keys() {
        assert_eq!(
            validate_keys(&json!(["a", "b"])),
            vec!["'0' is not a valid key", "'1' is not a valid key"]
        );
        assert!(validate_keys(&json!(42)).is_empty());
        assert!(validate_keys(&Value::Null).is_empty());
    }

    #[test]
    fn create_check_puts_type_errors_first() {
        let dog = json!({"owner": "me", "name": "Rex", "description": "d", "breed": "Lab"});
        assert_eq!(
            validate_new_dog(&dog),
            vec!["age should be a number", "'owner' is not a valid key"]
        );
    }

    #[test]
    fn partial_payload_passes_key_check() {
        assert!(validate_keys(&json!({"age": 4})).is_empty());
        assert!(validate_keys(&json!({})).is_empty());
    }
}
