use crate::error::{BioError, BioResult};
use crate::seq::store::SequenceStore;

/// One length extremum and the records attaining it, in store order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthExtremum {
    pub length: usize,
    pub ids: Vec<Box<str>>,
}

impl LengthExtremum {
    /// Number of records with exactly this length.
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthSummary {
    pub longest: LengthExtremum,
    pub shortest: LengthExtremum,
}

impl LengthSummary {
    pub fn max_length(&self) -> usize {
        self.longest.length
    }

    pub fn max_count(&self) -> usize {
        self.longest.count()
    }

    pub fn min_length(&self) -> usize {
        self.shortest.length
    }

    pub fn min_count(&self) -> usize {
        self.shortest.count()
    }
}

/// Longest and shortest sequence lengths over the store, ties included.
pub fn summarize(store: &SequenceStore) -> BioResult<LengthSummary> {
    let lengths = store.lengths();
    let max = lengths.iter().map(|&(_, n)| n).max().ok_or(BioError::EmptyStore)?;
    let min = lengths.iter().map(|&(_, n)| n).min().ok_or(BioError::EmptyStore)?;

    let attaining = |target: usize| LengthExtremum {
        length: target,
        ids: lengths
            .iter()
            .filter(|&&(_, n)| n == target)
            .map(|&(id, _)| id.into())
            .collect(),
    };

    Ok(LengthSummary {
        longest: attaining(max),
        shortest: attaining(min),
    })
}

/// Sum of all sequence lengths.
pub fn total_length(store: &SequenceStore) -> usize {
    store.iter().map(|r| r.len()).sum()
}
