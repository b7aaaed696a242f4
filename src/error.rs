use crate::model::Roll;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing {0}: please fill all fields")]
    MissingField(&'static str),
    #[error("invalid marks {0:?}: marks must be a number")]
    InvalidMarks(String),
    #[error("student with roll number {0} already exists")]
    DuplicateRoll(Roll),
    #[error("no student found with roll number {0}")]
    NotFound(String),
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed record {roll:?} in {}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        roll: String,
        reason: &'static str,
    },
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Operator mistakes, as opposed to storage faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidMarks(_) | Self::DuplicateRoll(_) | Self::NotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(Error::MissingField("name").is_user_error());
        assert!(Error::NotFound("12".into()).is_user_error());
        let e = Error::Write {
            path: "students.json".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(!e.is_user_error());
        assert_eq!(e.to_string(), "cannot write students.json");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::DuplicateRoll(Roll::from("101")).to_string(),
            "student with roll number 101 already exists"
        );
        assert_eq!(
            Error::InvalidMarks("abc".into()).to_string(),
            "invalid marks \"abc\": marks must be a number"
        );
    }
}
