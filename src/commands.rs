use crate::error::Error;
use crate::input::{parse_new_record, parse_roll};
use crate::model::{Listing, Record, Roll};
use crate::store::RecordStore;
use tracing::{info, instrument};

/// What an operation produced, ready to be displayed.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Added { name: String },
    Found { roll: Roll, record: Record },
    Listing(Vec<(Roll, Record)>),
    Topper { roll: Roll, record: Record },
    NoRecords,
}

/// Validate and add a new record, then save the collection.
#[instrument(skip(store))]
pub fn add(store: &RecordStore, roll: &str, name: &str, marks: &str) -> Result<Outcome, Error> {
    let (roll, record) = parse_new_record(roll, name, marks)?;
    let mut collection = store.load()?;
    let name = record.name.clone();
    collection.add(roll.clone(), record)?;
    store.save(&collection)?;
    info!(%roll, %name, "student added");
    Ok(Outcome::Added { name })
}

pub fn search(store: &RecordStore, roll: &str) -> Result<Outcome, Error> {
    let roll = parse_roll(roll)?;
    let collection = store.load()?;
    match collection.find(roll.as_str()) {
        Some(record) => Ok(Outcome::Found {
            record: record.clone(),
            roll,
        }),
        None => Err(Error::NotFound(roll.to_string())),
    }
}

pub fn list(store: &RecordStore) -> Result<Outcome, Error> {
    Ok(match store.load()?.list_all() {
        Listing::Empty => Outcome::NoRecords,
        Listing::Rows(rows) => Outcome::Listing(
            rows.into_iter()
                .map(|(roll, record)| (roll.clone(), record.clone()))
                .collect(),
        ),
    })
}

pub fn topper(store: &RecordStore) -> Result<Outcome, Error> {
    Ok(match store.load()?.find_topper() {
        Some((roll, record)) => Outcome::Topper {
            roll: roll.clone(),
            record: record.clone(),
        },
        None => Outcome::NoRecords,
    })
}
