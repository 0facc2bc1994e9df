//! Workbook type - the main document structure

use crate::cell::{CellAddress, CellData, CellRange, CellValue};
use crate::conditional_format::{ConditionalFormat, ConditionalFormatRule};
use crate::error::{Error, Result};
use crate::properties::{DocProperties, WorkbookOptions};
use crate::shared_strings::SharedStringTable;
use crate::style::{FinalizationSummary, Format, FormatId, FormatRegistry, Style};
use crate::worksheet::Worksheet;
use crate::{MAX_SHEET_NAME_LEN, MAX_STRING_LEN};

/// Tables shared by every worksheet of a workbook
#[derive(Debug, Default)]
struct SharedTables {
    sst: SharedStringTable,
    formats: FormatRegistry,
}

/// A workbook (spreadsheet document) being built for writing
///
/// Worksheets are created empty; a workbook written without any gets a
/// single `Sheet1`.
#[derive(Debug, Default)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Shared strings and formats
    shared: SharedTables,
    /// Active sheet index
    active_sheet: usize,
    /// Document metadata
    properties: DocProperties,
    /// Packaging options
    options: WorkbookOptions,
}

impl Workbook {
    /// Create a new workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workbook with packaging options
    pub fn with_options(options: WorkbookOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a writer for the worksheet at `index`
    pub fn worksheet_mut(&mut self, index: usize) -> Result<WorksheetWriter<'_>> {
        let count = self.worksheets.len();
        let sheet = self
            .worksheets
            .get_mut(index)
            .ok_or(Error::SheetOutOfBounds(index, count))?;
        Ok(WorksheetWriter {
            sheet,
            shared: &mut self.shared,
        })
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl ExactSizeIterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with default name (`Sheet1`, `Sheet2`, ...)
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name)?;

        self.worksheets.try_reserve(1)?;
        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name));
        log::trace!("added worksheet {index} '{name}'");

        Ok(index)
    }

    /// Get the active sheet index
    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    /// Set the sheet shown when the file is opened
    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.active_sheet = index;
        Ok(())
    }

    /// Register a format; it gets its XF index when a cell first uses it
    pub fn add_format(&mut self, style: Style) -> FormatId {
        self.shared.formats.add_format(style)
    }

    /// Get a format by handle
    pub fn format(&self, id: FormatId) -> Option<&Format> {
        self.shared.formats.format(id)
    }

    /// Get a mutable format by handle
    pub fn format_mut(&mut self, id: FormatId) -> Option<&mut Format> {
        self.shared.formats.format_mut(id)
    }

    /// The format registry
    pub fn formats(&self) -> &FormatRegistry {
        &self.shared.formats
    }

    /// The shared string table
    pub fn shared_strings(&self) -> &SharedStringTable {
        &self.shared.sst
    }

    /// Document properties
    pub fn properties(&self) -> &DocProperties {
        &self.properties
    }

    /// Replace the document properties
    pub fn set_properties(&mut self, properties: DocProperties) {
        self.properties = properties;
    }

    /// Packaging options
    pub fn options(&self) -> &WorkbookOptions {
        &self.options
    }

    /// Get mutable packaging options
    pub fn options_mut(&mut self) -> &mut WorkbookOptions {
        &mut self.options
    }

    /// Get everything ready for serialization.
    ///
    /// Adds `Sheet1` if the workbook has no worksheet, freezes the shared
    /// string table and runs the format finalization pass. On error the
    /// formats are left untouched.
    pub fn prepare(&mut self) -> Result<PreparedWorkbook<'_>> {
        if self.worksheets.is_empty() {
            self.add_worksheet()?;
        }

        let summary = self.shared.formats.finalize()?;
        self.shared.sst.freeze();

        Ok(PreparedWorkbook {
            workbook: self,
            summary,
        })
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }
        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(Error::InvalidSheetName(
                "Sheet name cannot start or end with an apostrophe".into(),
            ));
        }

        // Excel compares sheet names case-insensitively
        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    /// Generate a unique sheet name
    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

/// Writes cells into one worksheet
///
/// Borrows the worksheet together with the workbook's shared string table
/// and format registry, so strings and formats are indexed as they are
/// written.
#[derive(Debug)]
pub struct WorksheetWriter<'a> {
    sheet: &'a mut Worksheet,
    shared: &'a mut SharedTables,
}

impl<'a> WorksheetWriter<'a> {
    /// The worksheet being written
    pub fn worksheet(&self) -> &Worksheet {
        self.sheet
    }

    /// Write a string.
    ///
    /// An empty string writes a blank cell when a format is given and is
    /// ignored otherwise.
    pub fn write_string(
        &mut self,
        row: u32,
        col: u16,
        text: &str,
        format: Option<FormatId>,
    ) -> Result<()> {
        CellAddress::checked(row, col)?;
        if text.is_empty() {
            return self.write_blank(row, col, format);
        }

        let len = text.chars().count();
        if len > MAX_STRING_LEN {
            return Err(Error::StringTooLong(len, MAX_STRING_LEN));
        }

        let xf = self.resolve_xf(format)?;
        let index = self.shared.sst.intern(text)?;
        self.sheet
            .set(row, col, CellData::with_xf(CellValue::SharedString(index), xf));
        Ok(())
    }

    /// Write a number
    pub fn write_number(
        &mut self,
        row: u32,
        col: u16,
        value: f64,
        format: Option<FormatId>,
    ) -> Result<()> {
        CellAddress::checked(row, col)?;
        if !value.is_finite() {
            return Err(Error::NonFiniteNumber(value));
        }
        let xf = self.resolve_xf(format)?;
        self.sheet
            .set(row, col, CellData::with_xf(CellValue::Number(value), xf));
        Ok(())
    }

    /// Write a boolean
    pub fn write_boolean(
        &mut self,
        row: u32,
        col: u16,
        value: bool,
        format: Option<FormatId>,
    ) -> Result<()> {
        CellAddress::checked(row, col)?;
        let xf = self.resolve_xf(format)?;
        self.sheet
            .set(row, col, CellData::with_xf(CellValue::Boolean(value), xf));
        Ok(())
    }

    /// Write a formula; a leading `=` is optional. The cached result is 0.
    pub fn write_formula(
        &mut self,
        row: u32,
        col: u16,
        formula: &str,
        format: Option<FormatId>,
    ) -> Result<()> {
        CellAddress::checked(row, col)?;
        let formula = formula.strip_prefix('=').unwrap_or(formula);
        let xf = self.resolve_xf(format)?;
        let value = CellValue::Formula {
            formula: formula.to_string(),
            result: 0.0,
        };
        self.sheet.set(row, col, CellData::with_xf(value, xf));
        Ok(())
    }

    /// Write a formatted blank cell. Without a format nothing is written.
    pub fn write_blank(&mut self, row: u32, col: u16, format: Option<FormatId>) -> Result<()> {
        CellAddress::checked(row, col)?;
        let Some(format) = format else {
            return Ok(());
        };
        let xf = self.shared.formats.xf_index(format)?;
        self.sheet
            .set(row, col, CellData::with_xf(CellValue::Blank, xf));
        Ok(())
    }

    /// Add a conditional format over `range`.
    ///
    /// The rule's format gets its DXF index here. Priorities follow the
    /// order rules are added to the sheet.
    pub fn conditional_format(
        &mut self,
        range: CellRange,
        rule: ConditionalFormatRule,
    ) -> Result<()> {
        CellAddress::checked(range.end.row, range.end.col)?;

        let dxf_index = match rule.format {
            Some(format) => Some(self.shared.formats.dxf_index(format)?),
            None => None,
        };

        let cf = ConditionalFormat {
            range,
            priority: self.sheet.next_priority(),
            rule,
            dxf_index,
        };
        self.sheet.push_conditional_format(cf);
        Ok(())
    }

    fn resolve_xf(&mut self, format: Option<FormatId>) -> Result<u32> {
        match format {
            Some(format) => self.shared.formats.xf_index(format),
            None => Ok(0),
        }
    }
}

/// A workbook that is ready to serialize
///
/// Produced by [`Workbook::prepare`]; it borrows the workbook read-only.
#[derive(Debug)]
pub struct PreparedWorkbook<'a> {
    workbook: &'a Workbook,
    summary: FinalizationSummary,
}

impl<'a> PreparedWorkbook<'a> {
    /// Counts from the finalization pass
    pub fn summary(&self) -> &FinalizationSummary {
        &self.summary
    }

    /// Worksheets in tab order
    pub fn worksheets(&self) -> impl ExactSizeIterator<Item = &'a Worksheet> {
        self.workbook.worksheets.iter()
    }

    /// Index of the active sheet
    pub fn active_sheet(&self) -> usize {
        self.workbook.active_sheet
    }

    /// The frozen shared string table
    pub fn shared_strings(&self) -> &'a SharedStringTable {
        &self.workbook.shared.sst
    }

    /// The finalized formats
    pub fn formats(&self) -> &'a FormatRegistry {
        &self.workbook.shared.formats
    }

    /// Document properties
    pub fn properties(&self) -> &'a DocProperties {
        &self.workbook.properties
    }

    /// Packaging options
    pub fn options(&self) -> &'a WorkbookOptions {
        &self.workbook.options
    }
}
