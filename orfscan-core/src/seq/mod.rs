pub mod record;
pub mod store;

pub use record::SeqRecord;
pub use store::{DuplicatePolicy, SequenceStore};
