//! # quire
//!
//! A Rust library for writing Excel XLSX spreadsheets.
//!
//! Cells are written into an in-memory [`Workbook`]. Strings go through a
//! shared string table and cell formats are deduplicated into the style
//! sheet's font, fill, border and number format tables when the workbook
//! is saved.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quire::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let header = workbook.add_format(Style::new().bold(true).fill_color(Color::YELLOW));
//! let sheet_index = workbook.add_worksheet_with_name("Sales").unwrap();
//!
//! let mut sheet = workbook.worksheet_mut(sheet_index).unwrap();
//! sheet.write_string(0, 0, "Region", Some(header)).unwrap();
//! sheet.write_string(0, 1, "Total", Some(header)).unwrap();
//! sheet.write_string(1, 0, "North", None).unwrap();
//! sheet.write_number(1, 1, 1250.5, None).unwrap();
//! sheet.write_formula(2, 1, "=SUM(B2:B2)", None).unwrap();
//!
//! workbook.save("sales.xlsx").unwrap();
//! ```

pub mod prelude;

use std::path::Path;

// Re-export core types
pub use quire_core::{
    // Cell types
    CellAddress,
    CellData,
    CellRange,
    CellValue,
    // Conditional formatting types
    CfOperator,
    CfRuleType,
    ConditionalFormat,
    ConditionalFormatRule,
    // Document metadata
    DocProperties,
    // Error types
    Error,
    Result,
    // Strings
    SharedStringTable,
    // Main types
    PreparedWorkbook,
    Workbook,
    WorkbookOptions,
    Worksheet,
    WorksheetWriter,
    // Constants
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
    MAX_STRING_LEN,
};

// Re-export style types
pub use quire_core::style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, DiagonalDirection, FillStyle,
    FinalizationSummary, FontStyle, FontVerticalAlign, Format, FormatId, HorizontalAlignment,
    NumberFormat, PatternType, Protection, ReadingOrder, Style, Underline, VerticalAlignment,
};

// Re-export I/O types
pub use quire_xlsx::{XlsxError, XlsxResult, XlsxWriter};

/// Extension trait for Workbook to add file output
pub trait WorkbookExt {
    /// Save the workbook as an XLSX file.
    ///
    /// Saving prepares the workbook, so no strings can be added afterwards.
    fn save<P: AsRef<Path>>(&mut self, path: P) -> XlsxResult<()>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>>(&mut self, path: P) -> XlsxResult<()> {
        let path = path.as_ref();
        log::debug!("saving workbook to {}", path.display());
        XlsxWriter::write_file(self, path)
    }
}
