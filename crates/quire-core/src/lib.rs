//! # quire-core
//!
//! Core data structures for the quire xlsx writer.
//!
//! This crate provides the in-memory side of writing a workbook:
//! - [`SharedStringTable`] - Interns cell strings in first-seen order
//! - [`Style`] and [`FormatRegistry`] - Cell formats and their XF/DXF indices
//! - [`finalize_formats`](style::finalize_formats) - Font, fill, border and
//!   number format deduplication run before serialization
//! - [`Workbook`], [`Worksheet`] - The document being built
//!
//! ## Example
//!
//! ```rust
//! use quire_core::{Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let bold = workbook.add_format(Style::new().bold(true));
//! let index = workbook.add_worksheet().unwrap();
//!
//! let mut sheet = workbook.worksheet_mut(index).unwrap();
//! sheet.write_string(0, 0, "Total", Some(bold)).unwrap();
//! sheet.write_number(0, 1, 42.0, None).unwrap();
//!
//! let prepared = workbook.prepare().unwrap();
//! assert_eq!(prepared.summary().font_count, 2);
//! ```

pub mod cell;
pub mod conditional_format;
pub mod error;
pub mod properties;
pub mod shared_strings;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use conditional_format::{CfOperator, CfRuleType, ConditionalFormat, ConditionalFormatRule};
pub use error::{Error, Result};
pub use properties::{DocProperties, WorkbookOptions};
pub use shared_strings::SharedStringTable;
pub use workbook::{PreparedWorkbook, Workbook, WorksheetWriter};
pub use worksheet::Worksheet;

// Re-export the style types callers build formats from
pub use style::{
    Alignment, BorderLineStyle, BorderStyle, Color, FillStyle, FinalizationSummary, FontStyle,
    Format, FormatId, FormatRegistry, HorizontalAlignment, NumberFormat, PatternType, Style,
    VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Maximum number of characters in a cell string
pub const MAX_STRING_LEN: usize = 32_767;
