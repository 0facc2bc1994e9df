//! Cell styling and style indexing
//!
//! This module contains the raw style types a caller builds formats from:
//! - [`Style`] - Complete cell style
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation
//!
//! and the machinery that turns them into the indices `styles.xml` needs:
//! - [`FormatRegistry`] - XF/DXF index assignment at first use
//! - [`finalize_formats`] - font/fill/border/number format deduplication

mod alignment;
mod border;
mod color;
mod dedup;
mod fill;
mod finalize;
mod font;
mod format;
mod keys;
mod number_format;
mod registry;

pub use alignment::{Alignment, HorizontalAlignment, ReadingOrder, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle, DiagonalDirection};
pub use color::Color;
pub use dedup::DedupTable;
pub use fill::{FillStyle, PatternType};
pub use finalize::{finalize_formats, FinalizationSummary};
pub use font::{
    FontStyle, FontVerticalAlign, Underline, DEFAULT_FONT_FAMILY, DEFAULT_FONT_NAME,
    MAX_FONT_SIZE, MIN_FONT_SIZE,
};
pub use format::{Format, FormatId, FormatIndices};
pub use keys::{BorderKey, FillKey, FontKey};
pub use number_format::{NumberFormat, FIRST_CUSTOM_NUM_FORMAT_ID};
pub use registry::FormatRegistry;

/// Complete cell style
///
/// Equal styles share one cell XF record; see [`FormatRegistry`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: BorderStyle,
    /// Text alignment
    pub alignment: Alignment,
    /// Number format
    pub number_format: NumberFormat,
    /// Cell protection
    pub protection: Protection,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    /// Set underline
    pub fn underline(mut self, underline: Underline) -> Self {
        self.font.underline = underline;
        self
    }

    /// Set strikethrough
    pub fn strikethrough(mut self, strike: bool) -> Self {
        self.font.strikethrough = strike;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font = self.font.with_size(size);
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = name.into();
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set the fill pattern, keeping any colors already set
    pub fn pattern(mut self, pattern: PatternType) -> Self {
        self.fill.pattern = pattern;
        self
    }

    /// Set the fill foreground color
    pub fn fg_color(mut self, color: Color) -> Self {
        self.fill.fg_color = Some(color);
        self
    }

    /// Set the fill background color.
    ///
    /// A background color on its own becomes a solid fill when formats are
    /// finalized.
    pub fn bg_color(mut self, color: Color) -> Self {
        self.fill.bg_color = Some(color);
        self
    }

    /// Set all four outer borders
    pub fn border(mut self, style: BorderLineStyle) -> Self {
        let edge = BorderEdge { style, color: None };
        self.border.left = edge;
        self.border.right = edge;
        self.border.top = edge;
        self.border.bottom = edge;
        self
    }

    /// Set the color of all four outer borders
    pub fn border_color(mut self, color: Color) -> Self {
        self.border.left.color = Some(color);
        self.border.right.color = Some(color);
        self.border.top.color = Some(color);
        self.border.bottom.color = Some(color);
        self
    }

    /// Set number format string.
    ///
    /// Codes of Excel's built-in formats resolve to their fixed id.
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = NumberFormat::from_code(format);
        self
    }

    /// Set a built-in number format by id
    pub fn number_format_id(mut self, id: u16) -> Self {
        self.number_format = NumberFormat::from_id(id);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }

    /// Set the locked flag
    pub fn locked(mut self, locked: bool) -> Self {
        self.protection.locked = locked;
        self
    }

    /// Set the hidden flag
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.protection.hidden = hidden;
        self
    }

    /// Get a mutable reference to font settings
    pub fn font_mut(&mut self) -> &mut FontStyle {
        &mut self.font
    }

    /// Get a mutable reference to fill settings
    pub fn fill_mut(&mut self) -> &mut FillStyle {
        &mut self.fill
    }

    /// Get a mutable reference to border settings
    pub fn border_mut(&mut self) -> &mut BorderStyle {
        &mut self.border
    }

    /// Get a mutable reference to alignment settings
    pub fn alignment_mut(&mut self) -> &mut Alignment {
        &mut self.alignment
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: bool,
    /// Formula is hidden when sheet is protected
    pub hidden: bool,
}

impl Protection {
    /// Create default protection (locked, not hidden)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            hidden: false,
        }
    }

    /// Whether the xf needs a `<protection>` element
    pub fn is_applied(&self) -> bool {
        !self.locked || self.hidden
    }
}

impl Default for Protection {
    fn default() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }
}

impl std::hash::Hash for Style {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        self.fill.hash(state);
        self.border.hash(state);
        self.alignment.hash(state);
        self.number_format.hash(state);
        self.protection.hash(state);
    }
}

impl Eq for Style {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::new()
            .bold(true)
            .font_size(14.0)
            .fill_color(Color::YELLOW)
            .number_format("0.00");

        assert!(style.font.bold);
        assert_eq!(style.font.size, 14.0);
        assert_eq!(style.fill, FillStyle::solid(Color::YELLOW));
        assert_eq!(style.number_format, NumberFormat::BuiltIn(2));
    }

    #[test]
    fn test_default_protection_is_locked() {
        let style = Style::default();
        assert!(style.protection.locked);
        assert!(!style.protection.is_applied());
        assert!(Style::new().locked(false).protection.is_applied());
    }
}
