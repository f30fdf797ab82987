use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("malformed fasta input at line {line}: {msg}")]
    MalformedInput { msg: &'static str, line: usize },

    #[error("duplicate fasta header '{id}' at line {line}")]
    DuplicateHeader { id: String, line: usize },

    #[error("no records loaded; length statistics are undefined")]
    EmptyStore,

    #[error("invalid base '{ch}' at position {pos} (expected one of A, C, G, T)")]
    InvalidBase { ch: char, pos: usize },

    #[error("invalid window size: {window} (sequence length {len})")]
    InvalidWindow { window: usize, len: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),
}

pub type BioResult<T> = Result<T, BioError>;
