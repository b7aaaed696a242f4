pub use self::collection::{Listing, RecordCollection};
pub use self::record::{Record, Roll};

mod collection;
mod record;
