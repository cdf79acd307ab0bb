//! Field value types for dynamic field access

/// A polymorphic field value read off an entity by name
///
/// Used by the store to compare foreign keys without knowing the
/// concrete entity type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    StringList(Vec<String>),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// True when this is a string equal to `value`
    pub fn eq_str(&self, value: &str) -> bool {
        self.as_string() == Some(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::StringList(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::from("3".to_string());
        assert_eq!(value.as_string(), Some("3"));
        assert_ne!(value, FieldValue::Integer(3));
        assert!(value.eq_str("3"));
        assert!(!value.eq_str("30"));
    }

    #[test]
    fn test_non_string_never_equals_str() {
        assert!(!FieldValue::from(3).eq_str("3"));
        assert!(!FieldValue::from(vec!["3".to_string()]).eq_str("3"));
    }
}
