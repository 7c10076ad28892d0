//! Reading input sequences and writing alignment reports.
//!
//! The alignment core never touches files; this module is the collaborator
//! the command-line tool and demos use around it.
//!
//! Input files are FASTA or plain text: header lines (`>`) and blank lines are
//! skipped, every other line is trimmed and reduced to printable non-space
//! ASCII, and the remaining lines are concatenated.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::alignment::Alignment;
use crate::scoring::Scoring;
use crate::traits::Symbol;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}, line {line}: no valid sequence characters")]
    InvalidLine { path: PathBuf, line: usize },
    #[error("{path}: no sequence found")]
    EmptySequence { path: PathBuf },
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Keep only printable, non-space ASCII.
fn clean_line(line: &str) -> Vec<u8> {
    line.bytes().filter(|b| (33..127).contains(b)).collect()
}

/// Parse sequence text as read from `path` (used for error messages only).
pub fn parse_sequence(text: &str, path: &Path) -> Result<Vec<u8>> {
    let mut seq = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            return Err(Error::InvalidLine {
                path: path.to_path_buf(),
                line: idx + 1,
            });
        }
        seq.extend_from_slice(&cleaned);
    }
    if seq.is_empty() {
        return Err(Error::EmptySequence {
            path: path.to_path_buf(),
        });
    }
    Ok(seq)
}

/// Read one sequence from a FASTA or raw text file.
pub fn read_sequence(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sequence(&text, path)
}

/// Write the first aligned sequence, the match line, the score and the second
/// aligned sequence, one per line.
pub fn write_report<S: Symbol, W: Write>(
    mut writer: W,
    alignment: &Alignment<S>,
    scoring: &Scoring,
) -> Result<()> {
    writeln!(writer, "{}", alignment.first_string())?;
    writeln!(writer, "{}", alignment.match_line())?;
    writeln!(writer, "{}", alignment.score(scoring))?;
    writeln!(writer, "{}", alignment.second_string())?;
    writer.flush()?;
    Ok(())
}

/// [`write_report`] into a freshly created file at `path`.
pub fn write_report_file<S: Symbol>(
    path: impl AsRef<Path>,
    alignment: &Alignment<S>,
    scoring: &Scoring,
) -> Result<()> {
    let file = fs::File::create(path.as_ref())?;
    write_report(std::io::BufWriter::new(file), alignment, scoring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<u8>> {
        parse_sequence(text, Path::new("mem"))
    }

    #[test]
    fn fasta_headers_and_blank_lines_are_skipped() {
        let seq = parse(">seq1 description\nACGT\n\n  TTGA  \n").unwrap();
        assert_eq!(seq, b"ACGTTTGA".to_vec());
    }

    #[test]
    fn raw_text_is_concatenated() {
        assert_eq!(parse("GATT\r\nACA").unwrap(), b"GATTACA".to_vec());
    }

    #[test]
    fn non_printable_characters_are_dropped() {
        assert_eq!(parse("AC\tG T\u{7f}").unwrap(), b"ACGT".to_vec());
    }

    #[test]
    fn line_without_valid_characters_is_rejected() {
        let err = parse("ACGT\n\u{e9}\u{e8}\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = parse(">only a header\n").unwrap_err();
        assert!(matches!(err, Error::EmptySequence { .. }));
    }

    #[test]
    fn report_layout() {
        let aln = Alignment::new(b"G-AT".to_vec(), b"GCAA".to_vec());
        let mut buf = Vec::new();
        write_report(&mut buf, &aln, &Scoring::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "G-AT\n| |x\n1\nGCAA\n");
    }
}
