use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend record identifier.
///
/// Some endpoints return numeric keys, others return strings (UUIDs or codes),
/// so both JSON shapes decode into the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl EntityId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Parse a value coming from a form control (`<select>` option values are strings).
    ///
    /// Returns `None` for blank input so optional references stay unset.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<i64>() {
            Ok(n) => EntityId::Int(n),
            Err(_) => EntityId::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_numbers_and_strings() {
        let n: EntityId = serde_json::from_str("42").unwrap();
        let s: EntityId = serde_json::from_str("\"6f1c-aa\"").unwrap();
        assert_eq!(n, EntityId::Int(42));
        assert_eq!(s, EntityId::Text("6f1c-aa".to_string()));
        assert_eq!(n.as_string(), "42");
        assert_eq!(s.as_string(), "6f1c-aa");
    }

    #[test]
    fn test_parse_form_value() {
        assert_eq!(EntityId::parse(" 7 "), Some(EntityId::Int(7)));
        assert_eq!(EntityId::parse("abc"), Some(EntityId::Text("abc".into())));
        assert_eq!(EntityId::parse("   "), None);
    }

    #[test]
    fn test_serializes_back_to_received_shape() {
        assert_eq!(serde_json::to_string(&EntityId::Int(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&EntityId::from("x1")).unwrap(),
            "\"x1\""
        );
    }
}
