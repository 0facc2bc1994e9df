//! Dedup keys: the category-relevant fields of a style
//!
//! Each key holds only the fields that decide whether two formats can share
//! a `<font>`, `<fill>` or `<border>` record. Everything else a style carries
//! is left out so it cannot split an otherwise shared record.

use super::{
    BorderEdge, BorderStyle, Color, DiagonalDirection, FillStyle, FontStyle, FontVerticalAlign,
    PatternType, Underline,
};

/// Font-relevant fields of a style
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub name: String,
    /// Canonical size bits: NaNs and signed zeros fold together
    pub size_bits: u64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    pub outline: bool,
    pub shadow: bool,
    pub vertical_align: FontVerticalAlign,
    pub color: Option<Color>,
    pub family: u8,
    pub charset: u8,
    pub condense: bool,
    pub extend: bool,
    pub scheme: String,
    pub hyperlink: bool,
}

impl From<&FontStyle> for FontKey {
    fn from(font: &FontStyle) -> Self {
        Self {
            name: font.name.clone(),
            size_bits: font.size_bits(),
            bold: font.bold,
            italic: font.italic,
            underline: font.underline,
            strikethrough: font.strikethrough,
            outline: font.outline,
            shadow: font.shadow,
            vertical_align: font.vertical_align,
            color: font.color,
            family: font.family,
            charset: font.charset,
            condense: font.condense,
            extend: font.extend,
            scheme: font.scheme_name().to_string(),
            hyperlink: font.hyperlink,
        }
    }
}

/// Fill-relevant fields of a (normalized) style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillKey {
    pub pattern: PatternType,
    pub fg_color: Option<Color>,
    pub bg_color: Option<Color>,
}

impl FillKey {
    /// Reserved fill 0
    pub const NONE: FillKey = FillKey {
        pattern: PatternType::None,
        fg_color: None,
        bg_color: None,
    };

    /// Reserved fill 1
    pub const GRAY125: FillKey = FillKey {
        pattern: PatternType::Gray125,
        fg_color: None,
        bg_color: None,
    };
}

impl From<&FillStyle> for FillKey {
    fn from(fill: &FillStyle) -> Self {
        Self {
            pattern: fill.pattern,
            fg_color: fill.fg_color,
            bg_color: fill.bg_color,
        }
    }
}

/// Border-relevant fields of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderKey {
    pub left: BorderEdge,
    pub right: BorderEdge,
    pub top: BorderEdge,
    pub bottom: BorderEdge,
    pub diagonal: BorderEdge,
    pub diagonal_direction: DiagonalDirection,
}

impl From<&BorderStyle> for BorderKey {
    fn from(border: &BorderStyle) -> Self {
        Self {
            left: border.left,
            right: border.right,
            top: border.top,
            bottom: border.bottom,
            diagonal: border.diagonal,
            diagonal_direction: border.diagonal_direction,
        }
    }
}
