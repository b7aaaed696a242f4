use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "rstudents.toml";
pub const DEFAULT_DATA_FILE: &str = "students.json";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_data_file")]
    pub file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Config {
    /// Load the configuration from `file_name`, or from the default
    /// configuration file if it exists.
    pub fn load(file_name: Option<&Path>) -> Result<Self, Error> {
        let (path, explicit) = match file_name {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("cannot load configuration file {}", path.display())
                });
            }
        };
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.store.file, Path::new("students.json"));
        let config = Config::parse("[store]\n").unwrap();
        assert_eq!(config.store.file, Path::new("students.json"));
    }

    #[test]
    fn test_store_file() {
        let config = Config::parse("[store]\nfile = \"/var/lib/class/2b.json\"\n").unwrap();
        assert_eq!(config.store.file, Path::new("/var/lib/class/2b.json"));
    }

    #[test]
    fn test_unknown_keys() {
        assert!(Config::parse("[store]\npath = \"x.json\"\n").is_err());
        assert!(Config::parse("[solver]\n").is_err());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load(Some(&missing)).is_err());
        let present = dir.path().join("rstudents.toml");
        fs::write(&present, "[store]\nfile = \"db.json\"\n").unwrap();
        assert_eq!(
            Config::load(Some(&present)).unwrap().store.file,
            Path::new("db.json")
        );
    }
}
