use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record. Source documents mix `"id": 1` and `"id": "1"`,
/// so both shapes are kept as they were loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Textual(String),
}

impl RecordId {
    /// Dual-format equality used by every id lookup: a numeric id matches the
    /// numeric reading of the key, a textual id matches the key verbatim.
    pub fn matches(&self, key: &LookupKey<'_>) -> bool {
        match self {
            RecordId::Numeric(n) => key.numeric == Some(*n),
            RecordId::Textual(s) => key.text == Some(s.as_str()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(n) => write!(f, "{}", n),
            RecordId::Textual(s) => f.write_str(s),
        }
    }
}

/// A value to look a record up by, holding both of its interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupKey<'a> {
    numeric: Option<i64>,
    text: Option<&'a str>,
}

impl<'a> LookupKey<'a> {
    /// Key for an id taken from a request path.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            numeric: leading_integer(raw),
            text: Some(raw),
        }
    }

    /// Key for a foreign-key value stored on another record.
    pub fn from_id(id: &'a RecordId) -> Self {
        match id {
            RecordId::Numeric(n) => Self {
                numeric: Some(*n),
                text: None,
            },
            RecordId::Textual(s) => Self::parse(s),
        }
    }
}

/// Reads the integer prefix of `raw`: leading whitespace, an optional sign,
/// then decimal digits up to the first non-digit. `"12abc"` reads as 12.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Anything stored in one of the dataset collections.
pub trait Record {
    fn id(&self) -> &RecordId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("7"), Some(7));
        assert_eq!(leading_integer("007"), Some(7));
        assert_eq!(leading_integer("  12abc"), Some(12));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_numeric_id_matches_numeric_reading() {
        let id = RecordId::Numeric(1);
        assert!(id.matches(&LookupKey::parse("1")));
        assert!(id.matches(&LookupKey::parse("01")));
        assert!(id.matches(&LookupKey::parse("1x")));
        assert!(!id.matches(&LookupKey::parse("2")));
        assert!(!id.matches(&LookupKey::parse("one")));
    }

    #[test]
    fn test_textual_id_matches_verbatim() {
        let id = RecordId::Textual("s-1".to_string());
        assert!(id.matches(&LookupKey::parse("s-1")));
        assert!(!id.matches(&LookupKey::parse("S-1")));

        let numeric_text = RecordId::Textual("1".to_string());
        assert!(numeric_text.matches(&LookupKey::parse("1")));
        assert!(!numeric_text.matches(&LookupKey::parse("01")));
    }

    #[test]
    fn test_foreign_key_lookup() {
        // A numeric foreign key never matches a textual id
        let fk = RecordId::Numeric(1);
        assert!(RecordId::Numeric(1).matches(&LookupKey::from_id(&fk)));
        assert!(!RecordId::Textual("1".to_string()).matches(&LookupKey::from_id(&fk)));

        // A textual foreign key matches both shapes
        let fk = RecordId::Textual("1".to_string());
        assert!(RecordId::Numeric(1).matches(&LookupKey::from_id(&fk)));
        assert!(RecordId::Textual("1".to_string()).matches(&LookupKey::from_id(&fk)));
    }

    #[test]
    fn test_record_id_deserializes_both_shapes() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[1, "c-2"]"#).unwrap();
        assert_eq!(
            ids,
            vec![RecordId::Numeric(1), RecordId::Textual("c-2".to_string())]
        );
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1,"c-2"]"#);
    }
}
