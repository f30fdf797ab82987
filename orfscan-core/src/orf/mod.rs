//! Open reading frame scanning over the three forward frames.
//!
//! Each frame is cut into consecutive codons starting at offset 0, 1 or 2.
//! Starts (`ATG`) are paired greedily, smallest first, with the nearest
//! downstream in-frame stop (`TAA`, `TAG`, `TGA`). Several starts may share
//! one stop, so nested ORFs are reported separately.
//!
//! Scanning of a frame ends at the first start with no downstream stop;
//! later starts in that frame are not examined even if they could pair.

use std::fmt;
use std::ops::Range;

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frame {
    One,
    Two,
    Three,
}

impl Frame {
    pub const ALL: [Frame; 3] = [Frame::One, Frame::Two, Frame::Three];

    /// Offset of the first codon in this frame.
    pub fn offset(self) -> usize {
        match self {
            Frame::One => 0,
            Frame::Two => 1,
            Frame::Three => 2,
        }
    }

    pub fn from_offset(offset: usize) -> Option<Self> {
        match offset {
            0 => Some(Frame::One),
            1 => Some(Frame::Two),
            2 => Some(Frame::Three),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frame::One => "frame1",
            Frame::Two => "frame2",
            Frame::Three => "frame3",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ORF from the first base of its start codon through its stop codon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orf {
    /// 1-based position of the first base of the start codon.
    pub start: usize,
    /// Nucleotides covered, stop codon included. Always a multiple of 3.
    pub length: usize,
}

impl Orf {
    /// 1-based position of the last base of the stop codon.
    pub fn end(&self) -> usize {
        self.start + self.length - 1
    }

    /// 0-based half-open span, for slicing the scanned sequence.
    pub fn span(&self) -> Range<usize> {
        self.start - 1..self.start - 1 + self.length
    }
}

/// ORFs found in each forward frame of one sequence.
///
/// A frame with no ORF holds an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameResult {
    frames: [Vec<Orf>; 3],
}

impl FrameResult {
    pub fn get(&self, frame: Frame) -> &[Orf] {
        &self.frames[frame.offset()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Frame, &[Orf])> {
        Frame::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// True when no frame has an ORF.
    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(Vec::is_empty)
    }

    pub fn total(&self) -> usize {
        self.frames.iter().map(Vec::len).sum()
    }

    /// Longest ORF in `frame`; ties go to the one found first.
    pub fn longest_in(&self, frame: Frame) -> Option<Orf> {
        first_longest(self.get(frame).iter().copied())
    }

    /// Longest ORF over all frames; ties go to the lower frame, then the one found first.
    pub fn longest(&self) -> Option<(Frame, Orf)> {
        self.iter()
            .flat_map(|(f, orfs)| orfs.iter().map(move |&o| (f, o)))
            .fold(None, |best: Option<(Frame, Orf)>, cur| match best {
                Some(b) if b.1.length >= cur.1.length => Some(b),
                _ => Some(cur),
            })
    }

    /// Label-keyed `(start, length)` pairs, with `(-1, 0)` standing in for a
    /// frame without ORFs.
    pub fn to_pairs(&self) -> Vec<(&'static str, Vec<(i64, usize)>)> {
        self.iter()
            .map(|(f, orfs)| {
                let pairs = if orfs.is_empty() {
                    vec![(-1, 0)]
                } else {
                    orfs.iter().map(|o| (o.start as i64, o.length)).collect()
                };
                (f.label(), pairs)
            })
            .collect()
    }
}

pub(crate) fn first_longest<I>(orfs: I) -> Option<Orf>
where
    I: IntoIterator<Item = Orf>,
{
    orfs.into_iter().fold(None, |best: Option<Orf>, cur| match best {
        Some(b) if b.length >= cur.length => Some(b),
        _ => Some(cur),
    })
}

#[inline]
fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|s| s.as_slice() == codon)
}

/// Scan one frame of `seq`. Matching is case-sensitive.
pub fn find_orfs_in_frame(seq: &[u8], frame: Frame) -> Vec<Orf> {
    let offset = frame.offset();
    let Some(tail) = seq.get(offset..) else {
        return Vec::new();
    };

    // The trailing partial codon, if any, is never a start or a stop.
    let mut starts = Vec::new();
    let mut stops = Vec::new();
    for (idx, codon) in tail.chunks(3).enumerate() {
        if codon == START_CODON {
            starts.push(idx);
        } else if is_stop(codon) {
            stops.push(idx);
        }
    }

    // Stops at or before the first start can never close an ORF.
    if let Some(&first) = starts.first() {
        stops.retain(|&s| s > first);
    }

    let mut orfs = Vec::new();
    for &start in &starts {
        let next = stops.partition_point(|&s| s <= start);
        let Some(&end) = stops.get(next) else {
            break;
        };
        orfs.push(Orf {
            start: offset + start * 3 + 1,
            length: (end - start + 1) * 3,
        });
    }

    log::trace!("{frame}: {} starts, {} stops, {} orfs", starts.len(), stops.len(), orfs.len());
    orfs
}

/// Scan all three forward frames of `seq`.
pub fn find_orfs(seq: &[u8]) -> FrameResult {
    FrameResult {
        frames: Frame::ALL.map(|f| find_orfs_in_frame(seq, f)),
    }
}

#[cfg(test)]
mod tests;
