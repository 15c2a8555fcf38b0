//! Sequence file reader
//!
//! Accepts FASTA/FASTQ (parsed with needletail, first record only) as well as
//! bare sequence text with no header line. Gzipped files are decompressed
//! transparently.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use needletail::parse_fastx_reader;

use super::{InputError, InputResult};

/// Reads one sequence per file
pub struct SequenceReader;

impl SequenceReader {
    /// Read the sequence stored in `path`
    pub fn read_file<P: AsRef<Path>>(path: P) -> InputResult<Vec<u8>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| InputError::unavailable(path, e))?;

        let mut raw = Vec::new();
        let read = if path.to_string_lossy().ends_with(".gz") {
            GzDecoder::new(file).read_to_end(&mut raw)
        } else {
            let mut file = file;
            file.read_to_end(&mut raw)
        };
        read.map_err(|e| InputError::unavailable(path, e))?;

        let sequence = Self::parse_bytes(&raw, path)?;
        log::debug!("Read {} symbols from {}", sequence.len(), path.display());
        Ok(sequence)
    }

    /// Decode file contents; `origin` only labels errors.
    pub fn parse_bytes(raw: &[u8], origin: &Path) -> InputResult<Vec<u8>> {
        let first = raw.iter().copied().find(|b| !b.is_ascii_whitespace());
        let sequence = match first {
            Some(b'>') | Some(b'@') => Self::parse_fastx(raw, origin)?,
            _ => strip_layout(raw),
        };

        if sequence.is_empty() {
            return Err(InputError::EmptyFile(origin.to_path_buf()));
        }
        Ok(sequence)
    }

    fn parse_fastx(raw: &[u8], origin: &Path) -> InputResult<Vec<u8>> {
        let parse_error = |message: String| InputError::Parse {
            path: origin.to_path_buf(),
            line: 1,
            message,
        };

        let mut reader =
            parse_fastx_reader(Cursor::new(raw.to_vec())).map_err(|e| parse_error(e.to_string()))?;

        let sequence = match reader.next() {
            Some(record) => {
                let record = record.map_err(|e| parse_error(e.to_string()))?;
                record.seq().to_vec()
            }
            None => return Err(InputError::EmptyFile(origin.to_path_buf())),
        };

        if reader.next().is_some() {
            log::warn!(
                "{} holds more than one record, using the first",
                origin.display()
            );
        }
        Ok(sequence)
    }
}

/// Drop line breaks and tabs from bare sequence text
fn strip_layout(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .copied()
        .filter(|b| !matches!(b, b'\n' | b'\r' | b'\t'))
        .collect()
}
