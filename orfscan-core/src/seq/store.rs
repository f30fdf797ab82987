use crate::error::{BioError, BioResult};
use crate::seq::record::SeqRecord;
use std::collections::HashMap;

/// What to do when a header line repeats within one input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the earlier sequence, keeping the earlier slot. Logged at warn level.
    #[default]
    Overwrite,
    /// Fail the load with [`BioError::DuplicateHeader`].
    Reject,
}

/// Immutable mapping from header line to sequence, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceStore {
    records: Vec<SeqRecord>,
    index: HashMap<Box<str>, usize>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-parsed records.
    pub fn from_records<I>(records: I, policy: DuplicatePolicy) -> BioResult<Self>
    where
        I: IntoIterator<Item = SeqRecord>,
    {
        let mut store = Self::new();
        for (i, record) in records.into_iter().enumerate() {
            store.insert(record, policy, i + 1)?;
        }
        Ok(store)
    }

    /// `line` is only used for diagnostics.
    pub(crate) fn insert(
        &mut self,
        record: SeqRecord,
        policy: DuplicatePolicy,
        line: usize,
    ) -> BioResult<()> {
        match self.index.get(record.id()) {
            Some(&slot) => match policy {
                DuplicatePolicy::Overwrite => {
                    log::warn!(
                        "duplicate header {:?} at line {line}; replacing earlier sequence",
                        record.id()
                    );
                    self.records[slot] = record;
                    Ok(())
                }
                DuplicatePolicy::Reject => Err(BioError::DuplicateHeader {
                    id: record.id().to_string(),
                    line,
                }),
            },
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                Ok(())
            }
        }
    }

    /// Number of distinct record identifiers.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(identifier, sequence length)` for every record, in store order.
    pub fn lengths(&self) -> Vec<(&str, usize)> {
        self.records.iter().map(|r| (r.id(), r.len())).collect()
    }

    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.index.get(id).map(|&i| self.records[i].seq())
    }

    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeqRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id())
    }
}
