use crate::error::BioResult;
use crate::orf::{find_orfs, Frame, FrameResult, Orf};
use crate::repeats::count_repeats;
use crate::seq::record::SeqRecord;
use crate::seq::store::SequenceStore;
use crate::stats::{summarize, LengthSummary};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Frame whose longest ORF is reported on its own line.
    pub frame: Frame,
    /// k for the most-frequent-repeat line; `None` leaves it out.
    pub repeat_len: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            frame: Frame::Two,
            repeat_len: None,
        }
    }
}

impl ReportOptions {
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_repeat_len(mut self, k: usize) -> Self {
        self.repeat_len = Some(k);
        self
    }
}

/// An ORF together with the record and frame it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfHit {
    pub id: Box<str>,
    pub frame: Frame,
    pub orf: Orf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatHit {
    pub k: usize,
    pub kmer: Box<str>,
    pub count: usize,
}

/// Summary of one loaded FASTA file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub records: usize,
    pub lengths: LengthSummary,
    pub frame: Frame,
    /// Longest ORF in `frame` over all records; ties keep the earliest.
    pub longest_in_frame: Option<OrfHit>,
    /// Longest ORF in any frame over all records; ties keep the earliest.
    pub longest_overall: Option<OrfHit>,
    pub repeat: Option<RepeatHit>,
}

impl Report {
    pub fn build(store: &SequenceStore, options: ReportOptions) -> BioResult<Self> {
        let lengths = summarize(store)?;

        let scans: Vec<FrameResult> =
            par_map!(store.records(), |r: &SeqRecord| find_orfs(r.seq()));

        let mut longest_in_frame: Option<OrfHit> = None;
        let mut longest_overall: Option<OrfHit> = None;
        for (record, scan) in store.iter().zip(&scans) {
            if let Some(orf) = scan.longest_in(options.frame) {
                keep_longer(&mut longest_in_frame, record, options.frame, orf);
            }
            if let Some((frame, orf)) = scan.longest() {
                keep_longer(&mut longest_overall, record, frame, orf);
            }
        }

        let repeat = options
            .repeat_len
            .and_then(|k| most_frequent_repeat(store, k));

        Ok(Self {
            records: store.count(),
            lengths,
            frame: options.frame,
            longest_in_frame,
            longest_overall,
            repeat,
        })
    }
}

fn keep_longer(best: &mut Option<OrfHit>, record: &SeqRecord, frame: Frame, orf: Orf) {
    if best.as_ref().is_some_and(|b| b.orf.length >= orf.length) {
        return;
    }
    *best = Some(OrfHit {
        id: record.id.clone(),
        frame,
        orf,
    });
}

/// Windows never span two records.
fn most_frequent_repeat(store: &SequenceStore, k: usize) -> Option<RepeatHit> {
    let mut all = count_repeats(b"", k);
    for record in store.iter() {
        all.merge(&count_repeats(record.seq(), k));
    }
    all.most_frequent().map(|(kmer, count)| RepeatHit {
        k,
        kmer: String::from_utf8_lossy(kmer).into(),
        count,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of records in the multi-FASTA file: {}", self.records)?;
        writeln!(f, "The longest sequence length: {}", self.lengths.max_length())?;
        writeln!(f, "Number of longest sequences: {}", self.lengths.max_count())?;
        writeln!(f, "The shortest sequence length: {}", self.lengths.min_length())?;
        writeln!(f, "Number of shortest sequences: {}", self.lengths.min_count())?;

        match &self.longest_in_frame {
            Some(hit) => writeln!(
                f,
                "Longest ORF in {}: Length={} Start={} Record={}",
                self.frame, hit.orf.length, hit.orf.start, hit.id
            )?,
            None => writeln!(f, "Longest ORF in {}: Length=0", self.frame)?,
        }
        match &self.longest_overall {
            Some(hit) => writeln!(
                f,
                "Longest ORF overall: Length={} Start={} Frame={} Record={}",
                hit.orf.length, hit.orf.start, hit.frame, hit.id
            )?,
            None => writeln!(f, "Longest ORF overall: Length=0")?,
        }
        if let Some(rep) = &self.repeat {
            writeln!(
                f,
                "Most frequent repeat of length {}: {} ({} occurrences)",
                rep.k, rep.kmer, rep.count
            )?;
        }
        Ok(())
    }
}
