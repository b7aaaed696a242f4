use super::{Record, Roll};
use crate::error::Error;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// All the records, keyed by roll number, in the order they were added.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: IndexMap<Roll, Record>,
}

/// Result of listing a collection.
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    Empty,
    Rows(Vec<(&'a Roll, &'a Record)>),
}

impl RecordCollection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&Roll, &Record)> {
        self.records.iter()
    }

    /// Insert a new record. An existing roll number is never overwritten.
    pub fn add(&mut self, roll: Roll, record: Record) -> Result<(), Error> {
        match self.records.entry(roll) {
            Entry::Occupied(e) => Err(Error::DuplicateRoll(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(record);
                Ok(())
            }
        }
    }

    pub fn find(&self, roll: &str) -> Option<&Record> {
        self.records.get(roll)
    }

    pub fn list_all(&self) -> Listing<'_> {
        if self.is_empty() {
            Listing::Empty
        } else {
            Listing::Rows(self.sorted())
        }
    }

    /// Record with the highest marks. When several records share the
    /// highest marks, the one with the smallest roll number wins.
    pub fn find_topper(&self) -> Option<(&Roll, &Record)> {
        let mut best: Option<(&Roll, &Record)> = None;
        for (roll, record) in self.sorted() {
            if best.is_none_or(|(_, b)| record.marks > b.marks) {
                best = Some((roll, record));
            }
        }
        best
    }

    /// Return the first entry which could not have been entered through
    /// `add`, along with what is wrong with it.
    pub fn first_malformed(&self) -> Option<(&Roll, &'static str)> {
        self.iter().find_map(|(roll, record)| {
            if roll.as_str().trim().is_empty() {
                Some((roll, "empty roll number"))
            } else if roll.as_str() != roll.as_str().trim() {
                Some((roll, "roll number has surrounding whitespace"))
            } else if record.name.trim().is_empty() {
                Some((roll, "empty name"))
            } else if record.name != record.name.trim() {
                Some((roll, "name has surrounding whitespace"))
            } else if !record.marks.is_finite() {
                Some((roll, "marks are not a finite number"))
            } else {
                None
            }
        })
    }

    fn sorted(&self) -> Vec<(&Roll, &Record)> {
        let mut rows = self.records.iter().collect::<Vec<_>>();
        rows.sort_by(|(a, _), (b, _)| a.cmp(b));
        rows
    }
}
