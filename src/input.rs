use crate::error::Error;
use crate::model::{Record, Roll};

/// Parse marks typed by the operator.
pub fn parse_marks(input: &str) -> Result<f64, Error> {
    let input = input.trim();
    match input.parse::<f64>() {
        Ok(marks) if marks.is_finite() => Ok(marks),
        _ => Err(Error::InvalidMarks(input.to_owned())),
    }
}

pub fn parse_roll(roll: &str) -> Result<Roll, Error> {
    required("roll number", roll).map(Roll::from)
}

/// Check the three fields of a new record. Presence of every field is
/// checked before the marks are parsed.
pub fn parse_new_record(roll: &str, name: &str, marks: &str) -> Result<(Roll, Record), Error> {
    let name = required("name", name)?;
    let roll = required("roll number", roll)?;
    let marks = required("marks", marks)?;
    Ok((Roll::from(roll), Record::new(name, parse_marks(marks)?)))
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, Error> {
    let value = value.trim();
    if value.is_empty() {
        Err(Error::MissingField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marks() {
        assert_eq!(parse_marks("72").unwrap(), 72.0);
        assert_eq!(parse_marks(" 88.5 ").unwrap(), 88.5);
        assert_eq!(parse_marks("-3e1").unwrap(), -30.0);
        for bad in ["", "abc", "12a", "NaN", "inf", "-infinity"] {
            assert!(matches!(parse_marks(bad), Err(Error::InvalidMarks(_))), "{bad}");
        }
    }

    #[test]
    fn test_new_record() {
        let (roll, record) = parse_new_record(" 101 ", "  Bob", "72").unwrap();
        assert_eq!(roll.as_str(), "101");
        assert_eq!(record, Record::new("Bob", 72.0));
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            parse_new_record("101", "", "50"),
            Err(Error::MissingField("name"))
        ));
        assert!(matches!(
            parse_new_record("  ", "Bob", "50"),
            Err(Error::MissingField("roll number"))
        ));
        // A missing field is reported before unparseable marks.
        assert!(matches!(
            parse_new_record("", "Bob", "abc"),
            Err(Error::MissingField("roll number"))
        ));
        assert!(matches!(
            parse_new_record("101", "Bob", "abc"),
            Err(Error::InvalidMarks(m)) if m == "abc"
        ));
        assert!(matches!(parse_roll("\t"), Err(Error::MissingField(_))));
    }
}
