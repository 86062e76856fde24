// FASTA loading into an ordered collection of sequence bodies

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The concatenated body of one FASTA entry. Header text is not kept.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceRecord {
    pub sequence: String,
}

impl SequenceRecord {
    /// Number of characters, which is also the number of pixel columns the record spans.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCollection {
    records: Vec<SequenceRecord>,
}

impl SequenceCollection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    /// Length of the longest record, 0 when every record is empty.
    pub fn max_len(&self) -> usize {
        self.records.iter().map(SequenceRecord::len).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a SequenceCollection {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Reader for FASTA files
pub struct FastaReader;

impl FastaReader {
    /// Read every record of a FASTA file.
    ///
    /// Gzip and BGZF input is detected from the magic bytes and decompressed on the fly.
    pub fn read(path: &Path) -> Result<SequenceCollection> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open FASTA file: {}", path.display()))?;

        let mut buffered = BufReader::new(file);
        let is_compressed = is_gzip_compressed(&mut buffered)
            .with_context(|| format!("Failed to read FASTA file: {}", path.display()))?;

        let reader: Box<dyn BufRead> = if is_compressed {
            debug!("{} is gzip-compressed", path.display());
            Box::new(BufReader::new(MultiGzDecoder::new(buffered)))
        } else {
            Box::new(buffered)
        };

        Self::from_reader(reader)
            .with_context(|| format!("Failed to read FASTA file: {}", path.display()))
    }

    /// Group lines of `reader` into records.
    ///
    /// A line ends at `\n`, `\r` or `\r\n`. Empty lines are ignored and a header
    /// only closes a non-empty record, so headers with no body in between
    /// collapse. The last accumulator is always pushed, which means an empty
    /// input yields a single empty record.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<SequenceCollection> {
        let mut records = Vec::new();
        let mut current = String::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let text = line.strip_suffix(b"\n").unwrap_or(&line);

            // Old Mac files end lines with a lone CR
            for content in text.split(|&b| b == b'\r') {
                match content.first() {
                    None => {}
                    Some(b'>') => {
                        if !current.is_empty() {
                            records.push(SequenceRecord {
                                sequence: std::mem::take(&mut current),
                            });
                        }
                    }
                    Some(_) => current.push_str(&String::from_utf8_lossy(content)),
                }
            }
        }

        records.push(SequenceRecord { sequence: current });
        debug!("Loaded {} sequence records", records.len());

        Ok(SequenceCollection { records })
    }
}

/// Helper function to check if a stream starts with the gzip magic bytes
fn is_gzip_compressed<R: std::io::Read>(reader: &mut BufReader<R>) -> std::io::Result<bool> {
    let buffer = reader.fill_buf()?;
    Ok(buffer.len() >= 2 && buffer[0] == 0x1f && buffer[1] == 0x8b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn load(text: &str) -> SequenceCollection {
        FastaReader::from_reader(text.as_bytes()).unwrap()
    }

    fn bodies(collection: &SequenceCollection) -> Vec<&str> {
        collection.iter().map(|r| r.sequence.as_str()).collect()
    }

    #[test]
    fn test_two_records() {
        let collection = load(">seq1\nAT\n>seq2\nGC\n");
        assert_eq!(bodies(&collection), vec!["AT", "GC"]);
    }

    #[test]
    fn test_multiline_body_is_concatenated() {
        let collection = load(">s\nAT\nGC\n");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].sequence, "ATGC");
    }

    #[test]
    fn test_empty_input_yields_one_empty_record() {
        let collection = load("");
        assert_eq!(collection.len(), 1);
        assert!(collection.records()[0].is_empty());
        assert_eq!(collection.max_len(), 0);
    }

    #[test]
    fn test_trailing_header_flushes_empty_record() {
        let collection = load(">a\nACGT\n>b\n");
        assert_eq!(bodies(&collection), vec!["ACGT", ""]);
    }

    #[test]
    fn test_consecutive_headers_and_blank_lines() {
        let collection = load("\n>a\n>b\n\nAC\n\nGT\n>c\nN-n\n");
        assert_eq!(bodies(&collection), vec!["ACGT", "N-n"]);
    }

    #[test]
    fn test_body_before_first_header() {
        let collection = load("AAA\n>x\nCC");
        assert_eq!(bodies(&collection), vec!["AAA", "CC"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let collection = load(">a\r\nAC\r\nGT\r\n");
        assert_eq!(bodies(&collection), vec!["ACGT"]);
    }

    #[test]
    fn test_cr_only_line_endings() {
        let collection = load(">a\rAC\rGT\r>b\rTT\r");
        assert_eq!(bodies(&collection), vec!["ACGT", "TT"]);
    }

    #[test]
    fn test_lengths_count_characters() {
        let collection = load(">a\né A\n");
        assert_eq!(collection.records()[0].len(), 3);
        assert_eq!(collection.max_len(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let collection = FastaReader::from_reader(&b">a\nA\xffC\n"[..]).unwrap();
        assert_eq!(bodies(&collection), vec!["A\u{FFFD}C"]);
        assert_eq!(collection.max_len(), 3);
    }

    #[test]
    fn test_max_len() {
        let collection = load(">a\nA\n>b\nACGTACGT\n>c\nAC\n");
        assert_eq!(collection.max_len(), 8);
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("fastapaint_test_does_not_exist.fasta");
        std::fs::remove_file(&path).ok();

        let error = FastaReader::read(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to open FASTA file"));
    }

    #[test]
    fn test_read_plain_and_gzip_agree() {
        let text = b">r1\nACGT\nAC\n>r2\nGGTT\n";
        let plain_path = std::env::temp_dir().join("fastapaint_test_plain.fasta");
        let gzip_path = std::env::temp_dir().join("fastapaint_test_compressed.fasta.gz");

        std::fs::write(&plain_path, text).unwrap();
        {
            let mut encoder = GzEncoder::new(File::create(&gzip_path).unwrap(), Compression::default());
            encoder.write_all(text).unwrap();
            encoder.finish().unwrap();
        }

        let plain = FastaReader::read(&plain_path).unwrap();
        let compressed = FastaReader::read(&gzip_path).unwrap();
        assert_eq!(plain, compressed);
        assert_eq!(bodies(&plain), vec!["ACGTAC", "GGTT"]);

        std::fs::remove_file(plain_path).ok();
        std::fs::remove_file(gzip_path).ok();
    }
}
