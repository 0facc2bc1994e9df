//! Prelude module - common imports for quire users
//!
//! ```rust
//! use quire::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    BorderLineStyle,
    BorderStyle,
    // Cell types
    CellAddress,
    CellRange,
    CellValue,
    // Conditional formatting types
    CfOperator,
    CfRuleType,
    Color,
    ConditionalFormatRule,
    DocProperties,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    FormatId,
    HorizontalAlignment,
    NumberFormat,
    PatternType,
    Result,
    Style,
    Underline,
    VerticalAlignment,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    WorkbookOptions,
    Worksheet,
    // I/O types
    XlsxWriter,
};
