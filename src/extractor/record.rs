/// A single identity field as it progresses through the scan.
///
/// The reference info-file convention uses `???` as a "not yet supplied"
/// placeholder, and an empty capture carries no usable value either; both are
/// distinguished from a field no line ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Unset,
    Placeholder,
    Provided(String),
}

impl FieldValue {
    /// Classify an already-captured value. `placeholder` is the configured
    /// sentinel (`???` by default).
    pub fn classify(raw: String, placeholder: &str) -> Self {
        if raw.is_empty() || raw == placeholder {
            FieldValue::Placeholder
        } else {
            FieldValue::Provided(raw)
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, FieldValue::Provided(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Provided(value) => Some(value),
            _ => None,
        }
    }
}

/// The two identity fields collected from an info file.
///
/// Fields start out `Unset` and are overwritten on every matching line, so
/// the last matching line in the file wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: FieldValue,
    pub matriculation_number: FieldValue,
}

impl StudentRecord {
    pub fn new() -> Self {
        Self {
            name: FieldValue::Unset,
            matriculation_number: FieldValue::Unset,
        }
    }

    pub fn set_name(&mut self, raw: String, placeholder: &str) {
        self.name = FieldValue::classify(raw, placeholder);
    }

    pub fn set_matriculation_number(&mut self, raw: String, placeholder: &str) {
        self.matriculation_number = FieldValue::classify(raw, placeholder);
    }

    /// Both fields carry a usable value.
    pub fn is_complete(&self) -> bool {
        self.name.is_provided() && self.matriculation_number.is_provided()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_str()
    }

    pub fn matriculation_number(&self) -> Option<&str> {
        self.matriculation_number.as_str()
    }
}

impl Default for StudentRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_field_values() {
        assert_eq!(
            FieldValue::classify("Alice".to_string(), "???"),
            FieldValue::Provided("Alice".to_string())
        );
        assert_eq!(
            FieldValue::classify("???".to_string(), "???"),
            FieldValue::Placeholder
        );
        assert_eq!(
            FieldValue::classify(String::new(), "???"),
            FieldValue::Placeholder
        );
    }

    #[test]
    fn test_custom_placeholder() {
        assert_eq!(
            FieldValue::classify("TBD".to_string(), "TBD"),
            FieldValue::Placeholder
        );
        // The default sentinel is a normal value under a custom placeholder
        assert!(FieldValue::classify("???".to_string(), "TBD").is_provided());
    }

    #[test]
    fn test_record_starts_unset() {
        let record = StudentRecord::new();
        assert_eq!(record.name, FieldValue::Unset);
        assert_eq!(record.matriculation_number, FieldValue::Unset);
        assert!(!record.is_complete());
        assert!(record.name().is_none());
    }

    #[test]
    fn test_record_completeness() {
        let mut record = StudentRecord::new();
        record.set_name("Alice".to_string(), "???");
        assert!(!record.is_complete());

        record.set_matriculation_number("12345".to_string(), "???");
        assert!(record.is_complete());
        assert_eq!(record.name(), Some("Alice"));
        assert_eq!(record.matriculation_number(), Some("12345"));
    }

    #[test]
    fn test_last_value_wins() {
        let mut record = StudentRecord::new();
        record.set_name("Alice".to_string(), "???");
        record.set_name("Bob".to_string(), "???");
        assert_eq!(record.name(), Some("Bob"));

        // A later placeholder knocks out an earlier valid value
        record.set_name("???".to_string(), "???");
        assert!(!record.name.is_provided());
    }
}
