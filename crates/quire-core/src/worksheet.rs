//! Worksheet type
//!
//! A worksheet stores cells sparsely, row by row, in the order
//! `sheetData` needs them. Cells are written through a
//! [`WorksheetWriter`](crate::WorksheetWriter), which has access to the
//! workbook's shared string table and format registry.

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData, CellRange};
use crate::conditional_format::ConditionalFormat;

/// A worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cells keyed by row, then column
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
    /// Conditional formats in priority order
    conditional_formats: Vec<ConditionalFormat>,
}

impl Worksheet {
    /// Create a new, empty worksheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            conditional_formats: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|cells| cells.get(&col))
    }

    /// Get a cell by A1-style address
    pub fn cell(&self, address: &str) -> crate::Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Store a cell, replacing any previous content
    pub(crate) fn set(&mut self, row: u32, col: u16, data: CellData) {
        self.rows.entry(row).or_default().insert(col, data);
    }

    pub(crate) fn push_conditional_format(&mut self, cf: ConditionalFormat) {
        self.conditional_formats.push(cf);
    }

    /// Rows with at least one cell, ascending, each with its cells by column
    pub fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u16, CellData>)> {
        self.rows.iter().map(|(row, cells)| (*row, cells))
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The range spanning all stored cells, if any
    pub fn dimension(&self) -> Option<CellRange> {
        let first_row = *self.rows.keys().next()?;
        let last_row = *self.rows.keys().next_back()?;
        let first_col = self.rows.values().filter_map(|c| c.keys().next()).min()?;
        let last_col = self.rows.values().filter_map(|c| c.keys().next_back()).max()?;
        Some(CellRange::from_indices(
            first_row, *first_col, last_row, *last_col,
        ))
    }

    /// Conditional formats in priority order
    pub fn conditional_formats(&self) -> &[ConditionalFormat] {
        &self.conditional_formats
    }

    /// Next conditional format priority
    pub(crate) fn next_priority(&self) -> u32 {
        self.conditional_formats.len() as u32 + 1
    }
}
