//! Font style types

use super::Color;

/// Default font name used when none is set
pub const DEFAULT_FONT_NAME: &str = "Calibri";
/// Default font family (2 = Swiss)
pub const DEFAULT_FONT_FAMILY: u8 = 2;
/// Smallest font size Excel accepts
pub const MIN_FONT_SIZE: f64 = 1.0;
/// Largest font size Excel accepts
pub const MAX_FONT_SIZE: f64 = 409.0;

/// Font style settings
#[derive(Debug, Clone)]
pub struct FontStyle {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: f64,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline style
    pub underline: Underline,
    /// Strikethrough
    pub strikethrough: bool,
    /// Outline
    pub outline: bool,
    /// Shadow
    pub shadow: bool,
    /// Superscript/subscript
    pub vertical_align: FontVerticalAlign,
    /// Font color; `None` leaves it to the theme
    pub color: Option<Color>,
    /// Font family number
    pub family: u8,
    /// Character set
    pub charset: u8,
    /// Condense
    pub condense: bool,
    /// Extend
    pub extend: bool,
    /// Font scheme ("minor", "major", "none"); empty means "minor"
    pub scheme: String,
    /// Font belongs to a hyperlink style
    pub hyperlink: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikethrough: false,
            outline: false,
            shadow: false,
            vertical_align: FontVerticalAlign::Baseline,
            color: None,
            family: DEFAULT_FONT_FAMILY,
            charset: 0,
            condense: false,
            extend: false,
            scheme: String::new(),
            hyperlink: false,
        }
    }
}

impl FontStyle {
    /// Create a new default font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set font size; sizes outside 1..=409 points are ignored
    pub fn with_size(mut self, size: f64) -> Self {
        if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            self.size = size;
        } else {
            log::warn!("font size {size} outside {MIN_FONT_SIZE}..={MAX_FONT_SIZE}; ignored");
        }
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Set strikethrough
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set superscript/subscript
    pub fn with_vertical_align(mut self, align: FontVerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    /// Whether the `<name>` of this font is the default one (or unset)
    pub fn is_default_name(&self) -> bool {
        self.name.is_empty() || self.name == DEFAULT_FONT_NAME
    }

    /// The scheme written to `<scheme>`, with an empty one read as "minor"
    pub fn scheme_name(&self) -> &str {
        if self.scheme.is_empty() {
            "minor"
        } else {
            &self.scheme
        }
    }

    /// Bit pattern of the size used for equality and hashing.
    ///
    /// `size` is a public field, so it can hold values `with_size` rejects.
    /// All NaNs share one pattern and `-0.0` folds into `0.0`.
    pub(crate) fn size_bits(&self) -> u64 {
        if self.size.is_nan() {
            f64::NAN.to_bits()
        } else if self.size == 0.0 {
            0.0f64.to_bits()
        } else {
            self.size.to_bits()
        }
    }
}

impl PartialEq for FontStyle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size_bits() == other.size_bits()
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.outline == other.outline
            && self.shadow == other.shadow
            && self.vertical_align == other.vertical_align
            && self.color == other.color
            && self.family == other.family
            && self.charset == other.charset
            && self.condense == other.condense
            && self.extend == other.extend
            && self.scheme_name() == other.scheme_name()
            && self.hyperlink == other.hyperlink
    }
}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strikethrough.hash(state);
        self.outline.hash(state);
        self.shadow.hash(state);
        self.vertical_align.hash(state);
        self.color.hash(state);
        self.family.hash(state);
        self.charset.hash(state);
        self.condense.hash(state);
        self.extend.hash(state);
        self.scheme_name().hash(state);
        self.hyperlink.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

/// Font vertical alignment (superscript/subscript)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVerticalAlign {
    /// Normal baseline
    #[default]
    Baseline,
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
}
