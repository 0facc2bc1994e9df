//! Error types for quire-core

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quire-core
#[derive(Debug, Error)]
pub enum Error {
    /// A table could not grow (shared strings, dedup tables, worksheets)
    #[error("Out of memory while growing an internal table")]
    OutOfMemory(#[from] TryReserveError),

    /// A string was interned after serialization started
    #[error("Shared string table is frozen; no strings may be added after serialization starts")]
    SharedStringsFrozen,

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// String longer than Excel allows in a cell
    #[error("String of {0} characters exceeds the cell limit of {1}")]
    StringTooLong(usize, usize),

    /// NaN or an infinity, which a cell cannot hold
    #[error("Number {0} cannot be stored in a cell")]
    NonFiniteNumber(f64),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Format handle that does not belong to this workbook
    #[error("Invalid format id: {0}")]
    InvalidFormatId(usize),
}
