use crate::error::{BioError, BioResult};
use crate::io::trim_line_end;
use crate::seq::record::SeqRecord;
use crate::seq::store::{DuplicatePolicy, SequenceStore};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub duplicates: DuplicatePolicy,
}

impl LoadOptions {
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// Record currently being filled, with the line its header came from.
struct Pending {
    record: SeqRecord,
    line: usize,
}

/// Load a whole FASTA stream into memory.
///
/// A line starting with `>` opens a record whose identifier is the full line
/// (marker included, terminator stripped). Every other line is appended
/// verbatim to the open record. Empty lines before the first header are
/// skipped; any other data there is [`BioError::MalformedInput`].
pub fn read_store_from_reader<R: BufRead>(
    mut reader: R,
    options: LoadOptions,
) -> BioResult<SequenceStore> {
    let mut store = SequenceStore::new();
    let mut current: Option<Pending> = None;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = trim_line_end(&buf);

        if line.first() == Some(&b'>') {
            let id = std::str::from_utf8(line).map_err(|_| BioError::MalformedInput {
                msg: "header line is not valid UTF-8",
                line: line_no,
            })?;
            if let Some(done) = current.take() {
                store.insert(done.record, options.duplicates, done.line)?;
            }
            current = Some(Pending {
                record: SeqRecord::new(id, Vec::new()),
                line: line_no,
            });
            continue;
        }

        match current.as_mut() {
            Some(pending) => pending.record.seq.extend_from_slice(line),
            None if line.is_empty() => continue,
            None => {
                return Err(BioError::MalformedInput {
                    msg: "sequence data before the first '>' header",
                    line: line_no,
                })
            }
        }
    }

    if let Some(done) = current {
        store.insert(done.record, options.duplicates, done.line)?;
    }

    log::debug!(
        "loaded {} fasta records from {line_no} lines",
        store.count()
    );
    Ok(store)
}

pub fn read_store_from_path(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> BioResult<SequenceStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_store_from_reader(reader, options)
}

pub fn read_store_from_bytes(data: &[u8], options: LoadOptions) -> BioResult<SequenceStore> {
    let reader = BufReader::new(Cursor::new(data));
    read_store_from_reader(reader, options)
}
