use serde_json::Value;

/// Decides whether a record's `id` counts as missing and should be replaced
/// with a generated identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingId {
    /// Absent, `null`, `false`, `0` and `""` are all missing. This matches
    /// the truthiness check hosts written against JavaScript clients expect,
    /// at the cost of overwriting legitimate zero or empty identifiers.
    #[default]
    Falsy,

    /// Only an absent or `null` id is missing.
    NullOrAbsent,
}

impl MissingId {
    pub fn is_missing(self, id: Option<&Value>) -> bool {
        match (self, id) {
            (_, None | Some(Value::Null)) => true,
            (MissingId::NullOrAbsent, Some(_)) => false,
            (MissingId::Falsy, Some(value)) => is_falsy(value),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
