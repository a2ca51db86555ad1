use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableBuildError {
    #[error("Mapping entry has non-positive length: {length}")]
    NonPositiveLength { length: i64 },

    #[error("Mapping entries overlap in source space at {source_start}")]
    OverlappingSources { source_start: i64 },
}

#[derive(Error, Debug)]
pub enum ChainParseError {
    #[error("Input contains no values line")]
    MissingValues,

    #[error("Can't parse number in values line: {line}")]
    MalformedValues { line: String },

    #[error("Values line holds an odd number of integers: {count}")]
    OddValueCount { count: usize },

    #[error("Query range starting at {start} has non-positive length")]
    EmptyRange { start: i64 },

    #[error("Expected three integers per mapping line: {line}")]
    MalformedEntry { line: String },

    #[error("Input contains no mapping blocks")]
    MissingStages,

    #[error(transparent)]
    Table(#[from] TableBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
