pub mod fasta;

pub use fasta::{
    read_store_from_bytes, read_store_from_path, read_store_from_reader, LoadOptions,
};

/// Strip one trailing `\n` or `\r\n`, leaving every other byte untouched.
pub(crate) fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
