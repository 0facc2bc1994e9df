//! Formats: a style plus the indices assigned to it

use super::{Color, FillStyle, Style};

/// Handle to a format in a [`FormatRegistry`](super::FormatRegistry)
///
/// `FormatId(0)` is the workbook's default format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FormatId(pub usize);

impl FormatId {
    /// The default format every workbook starts with
    pub const DEFAULT: FormatId = FormatId(0);

    /// Position in the format arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Indices written by the XF registry and the finalization pass
///
/// The `has_*` flags mark the one format per distinct font/fill/border/number
/// format that gets serialized; every other format sharing that key only
/// carries the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatIndices {
    /// Cell XF index, assigned at first use
    pub xf_index: Option<u32>,
    /// Differential format index, assigned at first use in a conditional format
    pub dxf_index: Option<u32>,
    /// Index into `<fonts>`
    pub font_index: u32,
    /// Index into `<fills>`
    pub fill_index: u32,
    /// Index into `<borders>`
    pub border_index: u32,
    /// `numFmtId`: built-in id or custom id >= 164
    pub num_format_index: u32,
    /// This format owns its font entry
    pub has_font: bool,
    /// This format owns its fill entry
    pub has_fill: bool,
    /// This format owns its border entry
    pub has_border: bool,
    /// This format introduced its custom number format
    pub has_num_format: bool,
    /// The differential format sets a font property
    pub has_dxf_font: bool,
    /// The differential format sets a fill property
    pub has_dxf_fill: bool,
    /// The differential format sets a border side
    pub has_dxf_border: bool,
    /// Raw foreground color for the differential fill
    pub dxf_fg_color: Option<Color>,
    /// Raw background color for the differential fill
    pub dxf_bg_color: Option<Color>,
    /// Fill written to `<fills>`: the style's fill after solid normalization.
    /// The style itself keeps the caller's colors.
    pub fill: FillStyle,
}

/// A cell format: caller-set style fields plus output indices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Format {
    /// Raw style fields
    pub style: Style,
    /// Indices assigned during preparation
    pub indices: FormatIndices,
}

impl Format {
    /// Create a format from a style
    pub fn new(style: Style) -> Self {
        Self {
            style,
            indices: FormatIndices::default(),
        }
    }

    /// Whether the differential format carries anything at all
    pub fn has_dxf_content(&self) -> bool {
        self.indices.has_dxf_font
            || self.indices.has_dxf_fill
            || self.indices.has_dxf_border
            || self.indices.num_format_index > 0
    }
}
