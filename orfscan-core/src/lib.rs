#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod orf;
pub mod repeats;
pub mod report;
pub mod seq;
pub mod stats;

pub use alphabets::dna::reverse_complement;
pub use error::{BioError, BioResult};
pub use io::LoadOptions;
pub use orf::{find_orfs, find_orfs_in_frame, Frame, FrameResult, Orf};
pub use repeats::{count_repeats, RepeatTable};
pub use report::{Report, ReportOptions};
pub use seq::{DuplicatePolicy, SequenceStore};
pub use stats::{summarize, LengthSummary};
