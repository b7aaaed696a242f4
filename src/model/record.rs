use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Roll number of a student, used as the key of a record.
///
/// Rolls made only of digits compare numerically, so that `"9"` comes
/// before `"10"`. Other rolls come after them and compare as strings.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roll(String);

impl Roll {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Significant digits of an all-digit roll, without leading zeros.
    fn digits(&self) -> Option<&str> {
        if !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit()) {
            Some(self.0.trim_start_matches('0'))
        } else {
            None
        }
    }
}

impl Ord for Roll {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.digits(), other.digits()) {
            (Some(a), Some(b)) => (a.len(), a)
                .cmp(&(b.len(), b))
                .then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Roll {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Borrow<str> for Roll {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Roll {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Roll {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What is stored for a student under its roll number.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub marks: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, marks: f64) -> Self {
        Self {
            name: name.into(),
            marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_order() {
        let mut rolls = ["10", "b", "9", "007", "a", "7", "101"]
            .into_iter()
            .map(Roll::from)
            .collect::<Vec<_>>();
        rolls.sort();
        assert_eq!(
            rolls.iter().map(Roll::as_str).collect::<Vec<_>>(),
            vec!["007", "7", "9", "10", "101", "a", "b"]
        );
    }

    #[test]
    fn test_huge_numeric_roll() {
        let huge = Roll::from("9".repeat(50));
        assert!(Roll::from("5") < huge);
        assert!(huge < Roll::from("a"));
        let longer = Roll::from(format!("1{}", "0".repeat(49)));
        let shorter = Roll::from("9".repeat(45));
        assert!(shorter < longer);
        assert!(Roll::from(format!("000{}", "9".repeat(45))) < longer);
    }

    #[test]
    fn test_zero_rolls() {
        let mut rolls = ["1", "00", "0", "a0"]
            .into_iter()
            .map(Roll::from)
            .collect::<Vec<_>>();
        rolls.sort();
        assert_eq!(
            rolls.iter().map(Roll::as_str).collect::<Vec<_>>(),
            vec!["0", "00", "1", "a0"]
        );
    }

    #[test]
    fn test_record_json() {
        let record: Record = serde_json::from_str(r#"{"name": "Bob", "marks": 72}"#).unwrap();
        assert_eq!(record, Record::new("Bob", 72.0));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"Bob","marks":72.0}"#
        );
    }
}
