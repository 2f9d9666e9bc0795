//! Form values and validation errors held as JSON trees, addressed by
//! dotted paths with optional indices, e.g. `batches[0].quantity`.

use leptos::prelude::*;
use serde_json::{json, Map, Value};

use super::schema::FieldConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Splits a dotted path into segments, normalizing `a[0].b` and `a.0.b`
/// to the same shape. Malformed bracket text is kept as a key segment.
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        if part.is_empty() {
            continue;
        }
        let mut rest = part;
        if let Some(open) = rest.find('[') {
            let head = &rest[..open];
            if !head.is_empty() {
                segments.push(PathSegment::Key(head.to_string()));
            }
            rest = &rest[open..];
            while let Some(close) = rest.find(']') {
                let inner = &rest[1..close];
                match inner.parse::<usize>() {
                    Ok(index) => segments.push(PathSegment::Index(index)),
                    Err(_) => segments.push(PathSegment::Key(inner.to_string())),
                }
                rest = &rest[close + 1..];
                if !rest.starts_with('[') {
                    break;
                }
            }
        } else if let Ok(index) = rest.parse::<usize>() {
            segments.push(PathSegment::Index(index));
        } else {
            segments.push(PathSegment::Key(rest.to_string()));
        }
    }
    segments
}

/// Reads the value at `path`, or `None` when any segment is missing.
/// Never panics on shape mismatches.
pub fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in parse_path(path) {
        current = match segment {
            PathSegment::Key(key) => current.as_object()?.get(&key)?,
            PathSegment::Index(index) => current.as_array()?.get(index)?,
        };
    }
    Some(current)
}

/// Writes `value` at `path`, creating intermediate objects and arrays as
/// needed. Arrays are padded with `Null` up to the written index.
pub fn set_at(root: &mut Value, path: &str, value: Value) {
    let segments = parse_path(path);
    if segments.is_empty() {
        return;
    }
    let mut current = root;
    for (i, segment) in segments.iter().enumerate() {
        let last = i == segments.len() - 1;
        match segment {
            PathSegment::Key(key) => {
                if !current.is_object() {
                    *current = Value::Object(Map::new());
                }
                let Value::Object(map) = current else { return };
                if last {
                    map.insert(key.clone(), value);
                    return;
                }
                current = map.entry(key.clone()).or_insert(Value::Null);
            }
            PathSegment::Index(index) => {
                if !current.is_array() {
                    *current = Value::Array(Vec::new());
                }
                let Value::Array(arr) = current else { return };
                while arr.len() <= *index {
                    arr.push(Value::Null);
                }
                if last {
                    arr[*index] = value;
                    return;
                }
                current = &mut arr[*index];
            }
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn looks_like_email(text: &str) -> bool {
    let Some(at) = text.find('@') else {
        return false;
    };
    let (local, domain) = text.split_at(at);
    let domain = &domain[1..];
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Reactive form state shared by the field renderer and the submit
/// handler. `Copy` so field closures can capture it freely.
#[derive(Clone, Copy)]
pub struct FormState {
    pub values: RwSignal<Value>,
    pub errors: RwSignal<Value>,
    pub submitting: RwSignal<bool>,
}

impl FormState {
    pub fn new(initial: Value) -> Self {
        Self {
            values: RwSignal::new(initial),
            errors: RwSignal::new(json!({})),
            submitting: RwSignal::new(false),
        }
    }

    pub fn string_value(&self, path: &str) -> String {
        self.values
            .with(|v| value_at(v, path).map(value_to_string))
            .unwrap_or_default()
    }

    pub fn bool_value(&self, path: &str) -> bool {
        self.values
            .with(|v| value_at(v, path).and_then(Value::as_bool))
            .unwrap_or(false)
    }

    pub fn set_string(&self, path: &str, value: String) {
        self.values.update(|v| set_at(v, path, Value::String(value)));
    }

    pub fn set_bool(&self, path: &str, value: bool) {
        self.values.update(|v| set_at(v, path, Value::Bool(value)));
    }

    pub fn set_value(&self, path: &str, value: Value) {
        self.values.update(|v| set_at(v, path, value));
    }

    /// Error message for a field, or `None` when no error is recorded at
    /// that path. Missing intermediate segments are not an error.
    pub fn error_at(&self, path: &str) -> Option<String> {
        self.errors.with(|e| {
            value_at(e, path)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    }

    /// Runs every field's rules, rebuilding the error tree. Returns
    /// `true` when the form is valid.
    pub fn validate(&self, fields: &[FieldConfig]) -> bool {
        let mut errors = json!({});
        let mut valid = true;
        self.values.with_untracked(|values| {
            for field in fields {
                let value = value_at(values, &field.name);
                let text = value.map(value_to_string).unwrap_or_default();
                let message = check_rules(field, value, &text);
                if let Some(message) = message {
                    set_at(&mut errors, &field.name, Value::String(message));
                    valid = false;
                }
            }
        });
        self.errors.set(errors);
        valid
    }

    pub fn clear_errors(&self) {
        self.errors.set(json!({}));
    }
}

fn check_rules(field: &FieldConfig, value: Option<&Value>, text: &str) -> Option<String> {
    if let Some(message) = &field.rules.required {
        let empty = match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(Value::Bool(b)) => !b,
            _ => false,
        };
        if empty {
            return Some(message.clone());
        }
    }
    if text.is_empty() {
        return None;
    }
    if let Some((len, message)) = &field.rules.min_len {
        if text.chars().count() < *len {
            return Some(message.clone());
        }
    }
    if let Some(message) = &field.rules.email {
        if !looks_like_email(text) {
            return Some(message.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::schema::{FieldKind, Rules};

    #[test]
    fn parses_bracket_and_dot_paths_alike() {
        assert_eq!(parse_path("batches[0].quantity"), parse_path("batches.0.quantity"));
        assert_eq!(
            parse_path("a[2]"),
            vec![PathSegment::Key("a".into()), PathSegment::Index(2)]
        );
    }

    #[test]
    fn value_at_never_panics_on_shape_mismatch() {
        let root = json!({ "a": "scalar" });
        assert_eq!(value_at(&root, "a.b.c"), None);
        assert_eq!(value_at(&root, "a[0]"), None);
        assert_eq!(value_at(&root, "missing"), None);
    }

    #[test]
    fn set_at_creates_intermediate_containers() {
        let mut root = json!({});
        set_at(&mut root, "batches[1].quantity", json!(30));
        assert_eq!(
            root,
            json!({ "batches": [null, { "quantity": 30 }] })
        );
    }

    #[test]
    fn set_at_overwrites_scalar_intermediates() {
        let mut root = json!({ "a": "text" });
        set_at(&mut root, "a.b", json!(1));
        assert_eq!(root, json!({ "a": { "b": 1 } }));
    }

    #[test]
    fn validate_builds_nested_error_tree() {
        let state = FormState::new(json!({ "batches": [{ "batchId": "" }] }));
        let field = FieldConfig::new("batches[0].batchId", "Batch ID", FieldKind::Text)
            .rules(Rules::new().required("Batch ID is required"));
        assert!(!state.validate(&[field]));
        assert_eq!(
            state.error_at("batches[0].batchId").as_deref(),
            Some("Batch ID is required")
        );
        assert_eq!(state.error_at("batches[1].batchId"), None);
    }

    #[test]
    fn email_rule_skipped_when_empty_but_required_wins() {
        let state = FormState::new(json!({ "email": "not-an-email" }));
        let field = FieldConfig::new("email", "Email", FieldKind::Email)
            .rules(Rules::new().email("Invalid email"));
        assert!(!state.validate(&[field.clone()]));
        assert_eq!(state.error_at("email").as_deref(), Some("Invalid email"));

        state.set_string("email", "user@example.com".into());
        assert!(state.validate(&[field]));
        assert_eq!(state.error_at("email"), None);
    }
}
