//! Stored cell values

/// The value stored in a cell
///
/// Strings are stored by their index in the workbook's shared string table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value; the cell exists only to carry a format
    Blank,
    /// Numeric value
    Number(f64),
    /// Index into the shared string table
    SharedString(u32),
    /// Boolean value
    Boolean(bool),
    /// Formula with its cached result
    Formula {
        /// Formula text without the leading `=`
        formula: String,
        /// Result Excel shows until it recalculates
        result: f64,
    },
}

/// A cell: its value and cell XF index
#[derive(Debug, Clone, PartialEq)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Cell XF index (0 = default format)
    pub xf_index: u32,
}

impl CellData {
    /// Create a cell with the default format
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            xf_index: 0,
        }
    }

    /// Create a cell with an XF index
    pub fn with_xf(value: CellValue, xf_index: u32) -> Self {
        Self { value, xf_index }
    }
}
