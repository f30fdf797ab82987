use crate::error::{BioError, BioResult};
use memchr::memmem;
use std::collections::BTreeMap;

/// Overlapping k-mer occurrence counts for one sequence and one `k`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatTable {
    k: usize,
    counts: BTreeMap<Vec<u8>, usize>,
}

impl RepeatTable {
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn get(&self, kmer: &[u8]) -> usize {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// Number of distinct k-mers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of windows counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in lexicographic k-mer order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.counts.iter().map(|(k, &n)| (k.as_slice(), n))
    }

    /// Highest count; ties go to the lexicographically smallest k-mer.
    pub fn most_frequent(&self) -> Option<(&[u8], usize)> {
        self.iter()
            .fold(None, |best: Option<(&[u8], usize)>, cur| match best {
                Some(b) if b.1 >= cur.1 => Some(b),
                _ => Some(cur),
            })
    }

    /// Fold another table with the same `k` into this one.
    pub fn merge(&mut self, other: &RepeatTable) {
        for (kmer, n) in other.iter() {
            self.add(kmer, n);
        }
    }

    fn add(&mut self, kmer: &[u8], n: usize) {
        match self.counts.get_mut(kmer) {
            Some(c) => *c += n,
            None => {
                self.counts.insert(kmer.to_vec(), n);
            }
        }
    }
}

/// Count every length-`k` window of `seq`, stride one.
///
/// `k == 0` or `k > seq.len()` gives an empty table.
pub fn count_repeats(seq: &[u8], k: usize) -> RepeatTable {
    let mut table = RepeatTable {
        k,
        counts: BTreeMap::new(),
    };
    if k == 0 || k > seq.len() {
        return table;
    }
    for window in seq.windows(k) {
        table.add(window, 1);
    }
    table
}

/// Like [`count_repeats`] but rejects a window that cannot fit.
pub fn try_count_repeats(seq: &[u8], k: usize) -> BioResult<RepeatTable> {
    if k == 0 || k > seq.len() {
        return Err(BioError::InvalidWindow {
            window: k,
            len: seq.len(),
        });
    }
    Ok(count_repeats(seq, k))
}

/// Overlapping occurrences of `pattern` in `seq`. An empty pattern counts zero.
pub fn count_overlapping(seq: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() || pattern.len() > seq.len() {
        return 0;
    }

    let finder = memmem::Finder::new(pattern);
    let mut count = 0usize;
    let mut i = 0usize;

    while i <= seq.len() - pattern.len() {
        match finder.find(&seq[i..]) {
            Some(pos) => {
                count += 1;
                i += pos + 1;
            }
            None => break,
        }
    }

    count
}
