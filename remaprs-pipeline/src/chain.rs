use std::io::BufRead;
use std::path::{Path, PathBuf};

use remaprs_core::models::{Interval, IntervalSet};
use remaprs_core::utils::get_dynamic_reader;

use crate::errors::ChainParseError;
use crate::pipeline::Pipeline;
use crate::table::{RemapEntry, RemapTable};

/// A parsed remapping document.
///
/// The document is line-oriented: a header line holding a label and a flat
/// list of integers, then one or more blocks separated by blank lines. Each
/// block opens with a title line (ignored beyond marking the block boundary)
/// followed by one `dest_start source_start length` triple per line. Block
/// order defines stage order.
///
/// The header integers are kept verbatim in `values`; paired up as
/// `(start, length)` they are the initial query ranges. Parity and range
/// lengths are validated at parse time, so the pairing accessors cannot
/// fail afterwards.
#[derive(Debug, Clone)]
pub struct ChainFile {
    pub values: Vec<i64>,
    pub pipeline: Pipeline,
}

impl ChainFile {
    /// Parse a document from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ChainParseError> {
        let mut values: Option<Vec<i64>> = None;
        let mut stages: Vec<RemapTable> = Vec::new();
        let mut block: Option<Vec<RemapEntry>> = None;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();

            if values.is_none() {
                if trimmed.is_empty() {
                    continue;
                }
                values = Some(parse_values_line(trimmed)?);
                continue;
            }

            if trimmed.is_empty() {
                if let Some(entries) = block.take() {
                    stages.push(RemapTable::new(entries)?);
                }
                continue;
            }

            match block {
                // First line after a blank opens a block; its text is the
                // block title and carries no entries.
                None => block = Some(Vec::new()),
                Some(ref mut entries) => entries.push(parse_entry_line(trimmed)?),
            }
        }
        if let Some(entries) = block.take() {
            stages.push(RemapTable::new(entries)?);
        }

        let values = values.ok_or(ChainParseError::MissingValues)?;
        if values.is_empty() {
            return Err(ChainParseError::MissingValues);
        }
        if values.len() % 2 != 0 {
            return Err(ChainParseError::OddValueCount {
                count: values.len(),
            });
        }
        for pair in values.chunks(2) {
            if pair[1] <= 0 {
                return Err(ChainParseError::EmptyRange { start: pair[0] });
            }
        }
        if stages.is_empty() {
            return Err(ChainParseError::MissingStages);
        }

        Ok(ChainFile {
            values,
            pipeline: Pipeline::new(stages),
        })
    }

    /// The header integers paired up as `(start, length)` query ranges.
    pub fn ranges(&self) -> Vec<Interval> {
        self.values
            .chunks(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
            .collect()
    }

    /// The union of all query ranges as an interval set.
    pub fn range_set(&self) -> IntervalSet {
        self.ranges().into_iter().collect()
    }
}

fn parse_values_line(line: &str) -> Result<Vec<i64>, ChainParseError> {
    // everything after the label, or the whole line when there is none
    let numbers = line.split_once(':').map_or(line, |(_, rest)| rest);
    numbers
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| ChainParseError::MalformedValues {
                line: line.to_string(),
            })
        })
        .collect()
}

fn parse_entry_line(line: &str) -> Result<RemapEntry, ChainParseError> {
    let malformed = || ChainParseError::MalformedEntry {
        line: line.to_string(),
    };
    let mut tokens = line.split_whitespace();
    let mut next_number = || -> Result<i64, ChainParseError> {
        tokens
            .next()
            .ok_or_else(malformed)?
            .parse()
            .map_err(|_| malformed())
    };
    let entry = RemapEntry {
        dest_start: next_number()?,
        source_start: next_number()?,
        length: next_number()?,
    };
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok(entry)
}

impl TryFrom<&Path> for ChainFile {
    type Error = ChainParseError;

    ///
    /// Create a new [ChainFile] from a document on disk. Files ending in
    /// `.gz` are decoded transparently.
    ///
    /// # Arguments:
    /// - value: path to the document on disk.
    fn try_from(value: &Path) -> Result<Self, ChainParseError> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        ChainFile::from_reader(reader)
    }
}

impl TryFrom<&str> for ChainFile {
    type Error = ChainParseError;

    fn try_from(value: &str) -> Result<Self, ChainParseError> {
        ChainFile::try_from(Path::new(value))
    }
}

impl TryFrom<String> for ChainFile {
    type Error = ChainParseError;

    fn try_from(value: String) -> Result<Self, ChainParseError> {
        ChainFile::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for ChainFile {
    type Error = ChainParseError;

    fn try_from(value: PathBuf) -> Result<Self, ChainParseError> {
        ChainFile::try_from(value.as_path())
    }
}
