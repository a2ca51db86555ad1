use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

/// Get a reader for a file on disk, decoding gzip transparently when the
/// path ends in `.gz`.
///
/// # Arguments
/// - path: path to the file to read.
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;

    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_reads_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.txt");
        std::fs::write(&path, "79 14 55 13\n").unwrap();

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["79 14 55 13".to_string()]);
    }

    #[rstest]
    fn test_reads_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"79 14 55 13\n").unwrap();
        encoder.finish().unwrap();

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["79 14 55 13".to_string()]);
    }

    #[rstest]
    fn test_missing_file_errors() {
        let result = get_dynamic_reader(Path::new("/nonexistent/values.txt"));
        assert!(result.is_err());
    }
}
