use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result body returned by state-changing endpoints.
///
/// Both back-ends wrap their answers as
/// `{"success": true, "message": "...", "account": {...}}`; older endpoints
/// return the bare record instead. Everything besides `success` and
/// `message` is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(default, deserialize_with = "super::lenient::deserialize")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "super::lenient::deserialize")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActionEnvelope {
    /// Look up an identifying field such as `accountNumber`, first at the
    /// top level, then one level down inside the wrapped record.
    pub fn field(&self, key: &str) -> Option<String> {
        if let Some(found) = self.extra.get(key).and_then(scalar_text) {
            return Some(found);
        }
        self.extra
            .values()
            .filter_map(Value::as_object)
            .find_map(|nested| nested.get(key).and_then(scalar_text))
    }

    /// Backend message, or `fallback` when the backend sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_from_wrapped_record() {
        let envelope: ActionEnvelope = serde_json::from_value(json!({
            "success": true,
            "message": "opened",
            "account": {"id": 4, "accountNumber": "110-0004"}
        }))
        .unwrap();
        assert_eq!(envelope.field("accountNumber").as_deref(), Some("110-0004"));
        assert_eq!(envelope.field("id").as_deref(), Some("4"));
        assert_eq!(envelope.message_or("x"), "opened");
    }

    #[test]
    fn test_field_from_bare_record() {
        let envelope: ActionEnvelope =
            serde_json::from_value(json!({"customerNumber": "C-9"})).unwrap();
        assert_eq!(envelope.field("customerNumber").as_deref(), Some("C-9"));
        assert_eq!(envelope.field("missing"), None);
        assert_eq!(envelope.message_or("Customer registered"), "Customer registered");
    }
}
