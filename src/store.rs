//! Persistence of the record collection in a single JSON file.
//!
//! The whole collection is read at the start of every operation and written
//! back in full after a modification. Writes go through a temporary file
//! next to the target which is then renamed over it, so that an interrupted
//! write never leaves a truncated file behind.

use crate::error::Error;
use crate::model::RecordCollection;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection. A missing file is an empty collection.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<RecordCollection, Error> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no data file yet, starting with an empty collection");
                return Ok(RecordCollection::default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let collection: RecordCollection =
            serde_json::from_slice(&content).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;
        if let Some((roll, reason)) = collection.first_malformed() {
            return Err(Error::Malformed {
                path: self.path.clone(),
                roll: roll.to_string(),
                reason,
            });
        }
        debug!(records = collection.len(), "collection loaded");
        Ok(collection)
    }

    /// Replace the file content with the whole collection.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn save(&self, collection: &RecordCollection) -> Result<(), Error> {
        self.write_atomically(collection)
            .map_err(|source| Error::Write {
                path: self.path.clone(),
                source,
            })?;
        info!(records = collection.len(), "collection saved");
        Ok(())
    }

    fn write_atomically(&self, collection: &RecordCollection) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path)?;
        Self::write_to(&mut file, collection)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
            .inspect_err(|_| {
                let _ = fs::remove_file(&tmp_path);
            })
    }

    fn write_to(file: &mut File, collection: &RecordCollection) -> io::Result<()> {
        {
            let mut writer = BufWriter::new(&mut *file);
            let mut ser =
                Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
            collection
                .serialize(&mut ser)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        file.sync_all()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
