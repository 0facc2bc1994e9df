//! Format arena and XF/DXF index assignment
//!
//! Cell XF and DXF indices are handed out the first time a format is used,
//! so the order of `<cellXfs>` and `<dxfs>` follows the order the document
//! was written in. Formats with equal styles share one record.

use ahash::AHashMap;

use super::finalize::{finalize_formats, FinalizationSummary};
use super::{Format, FormatId, FormatIndices, Style};
use crate::error::{Error, Result};

/// Owns every format of a workbook
#[derive(Debug)]
pub struct FormatRegistry {
    /// All formats; `FormatId` indexes this
    formats: Vec<Format>,
    /// Style -> cell XF index
    xf_lookup: AHashMap<Style, u32>,
    /// Style -> DXF index
    dxf_lookup: AHashMap<Style, u32>,
    /// First format of each distinct style, in XF order
    used_xf: Vec<FormatId>,
    /// First format of each distinct conditional style, in DXF order
    used_dxf: Vec<FormatId>,
}

impl FormatRegistry {
    /// Create a registry holding the default format as XF 0
    pub fn new() -> Self {
        let default = Format::default();
        let mut xf_lookup = AHashMap::with_capacity(64);
        xf_lookup.insert(default.style.clone(), 0);

        let mut formats = Vec::with_capacity(64);
        formats.push(Format {
            indices: FormatIndices {
                xf_index: Some(0),
                ..FormatIndices::default()
            },
            ..default
        });

        Self {
            formats,
            xf_lookup,
            dxf_lookup: AHashMap::new(),
            used_xf: vec![FormatId::DEFAULT],
            used_dxf: Vec::new(),
        }
    }

    /// Add a format, returning its handle.
    ///
    /// The format gets no index until it is used.
    pub fn add_format(&mut self, style: Style) -> FormatId {
        let id = FormatId(self.formats.len());
        self.formats.push(Format::new(style));
        id
    }

    /// Get a format by handle
    pub fn format(&self, id: FormatId) -> Option<&Format> {
        self.formats.get(id.index())
    }

    /// Get a mutable format by handle.
    ///
    /// Changing the style of a format that is already in use does not move
    /// it to another XF record.
    pub fn format_mut(&mut self, id: FormatId) -> Option<&mut Format> {
        self.formats.get_mut(id.index())
    }

    /// The default format (XF 0)
    pub fn default_format(&self) -> &Format {
        &self.formats[0]
    }

    /// Cell XF index of a format, assigned at first use
    pub fn xf_index(&mut self, id: FormatId) -> Result<u32> {
        let format = self
            .formats
            .get(id.index())
            .ok_or(Error::InvalidFormatId(id.index()))?;
        if let Some(index) = format.indices.xf_index {
            return Ok(index);
        }

        let index = match self.xf_lookup.get(&format.style) {
            Some(&index) => index,
            None => {
                self.xf_lookup.try_reserve(1)?;
                self.used_xf.try_reserve(1)?;
                let index = self.used_xf.len() as u32;
                self.xf_lookup.insert(format.style.clone(), index);
                self.used_xf.push(id);
                index
            }
        };

        self.formats[id.index()].indices.xf_index = Some(index);
        Ok(index)
    }

    /// Differential format index of a format, assigned at first use
    pub fn dxf_index(&mut self, id: FormatId) -> Result<u32> {
        let format = self
            .formats
            .get(id.index())
            .ok_or(Error::InvalidFormatId(id.index()))?;
        if let Some(index) = format.indices.dxf_index {
            return Ok(index);
        }

        let index = match self.dxf_lookup.get(&format.style) {
            Some(&index) => index,
            None => {
                self.dxf_lookup.try_reserve(1)?;
                self.used_dxf.try_reserve(1)?;
                let index = self.used_dxf.len() as u32;
                self.dxf_lookup.insert(format.style.clone(), index);
                self.used_dxf.push(id);
                index
            }
        };

        self.formats[id.index()].indices.dxf_index = Some(index);
        Ok(index)
    }

    /// Formats that own a cell XF record, in XF order
    pub fn xf_formats(&self) -> impl ExactSizeIterator<Item = &Format> + '_ {
        self.used_xf.iter().map(|id| &self.formats[id.index()])
    }

    /// Formats that own a DXF record, in DXF order
    pub fn dxf_formats(&self) -> impl ExactSizeIterator<Item = &Format> + '_ {
        self.used_dxf.iter().map(|id| &self.formats[id.index()])
    }

    /// Handles of the formats that own a cell XF record
    pub fn used_xf(&self) -> &[FormatId] {
        &self.used_xf
    }

    /// Handles of the formats that own a DXF record
    pub fn used_dxf(&self) -> &[FormatId] {
        &self.used_dxf
    }

    /// Number of formats in the arena
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Always false: the default format is never removed
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Run the finalization pass over the formats in use
    pub fn finalize(&mut self) -> Result<FinalizationSummary> {
        finalize_formats(&mut self.formats, &self.used_xf, &self.used_dxf)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
