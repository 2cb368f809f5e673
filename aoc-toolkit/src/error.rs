//! Error types for the toolkit

use thiserror::Error;

/// Error type for malformed puzzle text
///
/// Line numbers are 1-based and refer to the text handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Graph line without a `source:` prefix
    #[error("line {line}: expected `node: targets...`, got {content:?}")]
    MissingDelimiter { line: usize, content: String },
    /// Graph line whose source name is empty
    #[error("line {line}: empty source node name")]
    EmptyNodeName { line: usize },
    /// Point line with the wrong number of coordinates
    #[error("line {line}: expected {expected} coordinates, found {found}")]
    CoordinateCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Coordinate that is not an integer
    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },
    /// Shape header that is not `<number>:`
    #[error("line {line}: malformed shape header {header:?}")]
    ShapeHeader { line: usize, header: String },
    /// Shape header without any rows below it
    #[error("shape {id} has no rows")]
    EmptyShape { id: usize },
    /// Shape row containing something other than `#` or `.`
    #[error("line {line}: unexpected shape cell {found:?}")]
    ShapeCell { line: usize, found: char },
    /// Shape rows of differing widths
    #[error("shape {id}: rows have differing widths")]
    RaggedShape { id: usize },
    /// Shape header out of sequence; ids must run `0, 1, 2, ...`
    #[error("line {line}: expected shape id {expected}, found {found}")]
    ShapeId {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Region line that is not `WxH: counts...`
    #[error("line {line}: malformed region {content:?}")]
    Region { line: usize, content: String },
    /// Region count list whose length differs from the number of shapes
    #[error("line {line}: expected {expected} shape counts, found {found}")]
    RegionCountLength {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Error type for path queries that cannot be encoded or answered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// More required nodes than bits in the visitation mask
    #[error("{0} required nodes exceed the 64-node mask limit")]
    TooManyRequired(usize),
    /// Qualifying path count larger than `u128::MAX`
    #[error("qualifying path count exceeds u128")]
    CountOverflow,
}
