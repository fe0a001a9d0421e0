//! Validation rules
//!
//! A rule is a pure function of the current form values, the name of the
//! field being checked and the arguments bound to the rule. It returns an
//! empty string when the field is valid and a human-readable message
//! otherwise.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::state::Values;

/// Signature shared by every validation rule
pub type RuleFn = dyn Fn(&Values, &str, &Value) -> String + Send + Sync;

pub const REQUIRED_MESSAGE: &str = "This cannot be empty.";
pub const INVALID_EMAIL_MESSAGE: &str = "Email format is invalid.";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
            .expect("email pattern is a valid regex");
}

/// Fails when the value is undefined, null or the empty string.
///
/// `0` and `false` are considered filled in.
pub fn required(values: &Values, field_name: &str, _args: &Value) -> String {
    match values.get(field_name) {
        None | Some(Value::Null) => REQUIRED_MESSAGE.to_string(),
        Some(Value::String(s)) if s.is_empty() => REQUIRED_MESSAGE.to_string(),
        Some(_) => String::new(),
    }
}

/// Fails when a value is present and is not shaped like `local@domain`.
pub fn is_email(values: &Values, field_name: &str, _args: &Value) -> String {
    let Some(value) = present(values, field_name) else {
        return String::new();
    };

    match value {
        Value::String(s) if EMAIL_PATTERN.is_match(s) => String::new(),
        _ => INVALID_EMAIL_MESSAGE.to_string(),
    }
}

/// Fails when a value is present and longer than the limit bound in `args`.
///
/// Strings are measured in characters, arrays in elements. Other values have
/// no length and always pass.
pub fn max_length(values: &Values, field_name: &str, args: &Value) -> String {
    let Some(limit) = args.as_u64() else {
        log::warn!("max_length on '{}' has no numeric limit: {}", field_name, args);
        return String::new();
    };

    let length = match present(values, field_name) {
        Some(Value::String(s)) => s.chars().count() as u64,
        Some(Value::Array(items)) => items.len() as u64,
        _ => return String::new(),
    };

    if length > limit {
        format!("This field can not exceed {} characters.", limit)
    } else {
        String::new()
    }
}

/// Returns the value for `field_name` only when it is truthy
fn present<'a>(values: &'a Values, field_name: &str) -> Option<&'a Value> {
    values.get(field_name).filter(|value| match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// A rule bound to its arguments, attached to one field
#[derive(Clone)]
pub struct Validation {
    rule: Arc<RuleFn>,
    args: Value,
}

impl Validation {
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(&Values, &str, &Value) -> String + Send + Sync + 'static,
    {
        Self {
            rule: Arc::new(rule),
            args: Value::Null,
        }
    }

    pub fn with_args(mut self, args: impl Into<Value>) -> Self {
        self.args = args.into();
        self
    }

    pub fn required() -> Self {
        Self::new(required)
    }

    pub fn is_email() -> Self {
        Self::new(is_email)
    }

    pub fn max_length(limit: u64) -> Self {
        Self::new(max_length).with_args(limit)
    }

    /// Chains several rules into one; the first failure wins
    pub fn all(rules: impl IntoIterator<Item = Validation>) -> Self {
        let rules: Vec<Validation> = rules.into_iter().collect();
        Self::new(move |values, field_name, _args| {
            rules
                .iter()
                .map(|rule| rule.run(values, field_name))
                .find(|message| !message.is_empty())
                .unwrap_or_default()
        })
    }

    pub fn args(&self) -> &Value {
        &self.args
    }

    /// Runs the rule against `values` with the bound arguments
    pub fn run(&self, values: &Values, field_name: &str) -> String {
        (self.rule)(values, field_name, &self.args)
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, Value)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_required_rejects_missing_null_and_empty() {
        let none = Values::new();
        assert_eq!(required(&none, "email", &Value::Null), "This cannot be empty.");

        let null = values(&[("email", Value::Null)]);
        assert_eq!(required(&null, "email", &Value::Null), REQUIRED_MESSAGE);

        let empty = values(&[("email", json!(""))]);
        assert_eq!(required(&empty, "email", &Value::Null), REQUIRED_MESSAGE);
    }

    #[test]
    fn test_required_accepts_any_other_value() {
        for value in [json!("x"), json!(" "), json!(0), json!(false), json!([]), json!({})] {
            let vals = values(&[("f", value.clone())]);
            assert_eq!(required(&vals, "f", &Value::Null), "", "value {} should pass", value);
        }
    }

    #[test]
    fn test_is_email_accepts_well_formed_addresses() {
        for addr in ["jane@example.com", "j.doe+tag@mail.example.co.uk", "root@localhost"] {
            let vals = values(&[("email", json!(addr))]);
            assert_eq!(is_email(&vals, "email", &Value::Null), "", "{} should pass", addr);
        }
    }

    #[test]
    fn test_is_email_rejects_malformed_addresses() {
        for addr in ["jane", "jane@", "@example.com", "jane@exa mple.com", "a@b..c"] {
            let vals = values(&[("email", json!(addr))]);
            assert_eq!(
                is_email(&vals, "email", &Value::Null),
                INVALID_EMAIL_MESSAGE,
                "{} should fail",
                addr
            );
        }
    }

    #[test]
    fn test_is_email_ignores_absent_values() {
        assert_eq!(is_email(&Values::new(), "email", &Value::Null), "");
        let empty = values(&[("email", json!(""))]);
        assert_eq!(is_email(&empty, "email", &Value::Null), "");
    }

    #[test]
    fn test_max_length_boundaries() {
        let limit = json!(10);

        let exact = values(&[("bio", json!("1234567890"))]);
        assert_eq!(max_length(&exact, "bio", &limit), "");

        let over = values(&[("bio", json!("12345678901"))]);
        assert_eq!(
            max_length(&over, "bio", &limit),
            "This field can not exceed 10 characters."
        );

        assert_eq!(max_length(&Values::new(), "bio", &limit), "");
    }

    #[test]
    fn test_max_length_counts_characters_not_bytes() {
        let vals = values(&[("bio", json!("ééééé"))]);
        assert_eq!(max_length(&vals, "bio", &json!(5)), "");
    }

    #[test]
    fn test_validation_all_returns_first_failure() {
        let rule = Validation::all([Validation::required(), Validation::is_email()]);

        assert_eq!(rule.run(&Values::new(), "email"), REQUIRED_MESSAGE);

        let bad = values(&[("email", json!("nope"))]);
        assert_eq!(rule.run(&bad, "email"), INVALID_EMAIL_MESSAGE);

        let good = values(&[("email", json!("a@b.io"))]);
        assert_eq!(rule.run(&good, "email"), "");
    }

    #[test]
    fn test_validation_binds_args() {
        let rule = Validation::max_length(3);
        assert_eq!(rule.args(), &json!(3));

        let vals = values(&[("code", json!("abcd"))]);
        assert!(rule.run(&vals, "code").contains('3'));
    }
}
