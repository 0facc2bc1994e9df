//! Number format types

/// First id available to custom number formats (0xA4)
pub const FIRST_CUSTOM_NUM_FORMAT_ID: u16 = 164;

/// Excel's built-in number formats that have a fixed code.
///
/// Ids below 164 that are missing here are reserved and display as "General".
const BUILTIN_FORMATS: &[(u16, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (5, "($#,##0_);($#,##0)"),
    (6, "($#,##0_);[Red]($#,##0)"),
    (7, "($#,##0.00_);($#,##0.00)"),
    (8, "($#,##0.00_);[Red]($#,##0.00)"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "m/d/yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "(#,##0_);(#,##0)"),
    (38, "(#,##0_);[Red](#,##0)"),
    (39, "(#,##0.00_);(#,##0.00)"),
    (40, "(#,##0.00_);[Red](#,##0.00)"),
    (41, "_(* #,##0_);_(* (#,##0);_(* \"-\"_);_(@_)"),
    (42, "_($* #,##0_);_($* (#,##0);_($* \"-\"_);_(@_)"),
    (43, "_(* #,##0.00_);_(* (#,##0.00);_(* \"-\"??_);_(@_)"),
    (44, "_($* #,##0.00_);_($* (#,##0.00);_($* \"-\"??_);_(@_)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mm:ss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID (0-163)
    BuiltIn(u16),

    /// Custom format string; gets an id >= 164 during finalization
    Custom(String),
}

impl NumberFormat {
    /// 1 - 0
    pub const ID_NUMBER_INT: u16 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u16 = 2;
    /// 3 - #,##0
    pub const ID_NUMBER_SEP: u16 = 3;
    /// 4 - #,##0.00
    pub const ID_NUMBER_SEP_DEC2: u16 = 4;
    /// 9 - 0%
    pub const ID_PERCENT_INT: u16 = 9;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u16 = 10;
    /// 14 - m/d/yy
    pub const ID_DATE_SHORT: u16 = 14;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u16 = 22;
    /// 49 - @
    pub const ID_TEXT: u16 = 49;

    /// Create a number format from a format code.
    ///
    /// Codes that match one of Excel's built-in formats resolve to
    /// [`NumberFormat::BuiltIn`] and never become custom formats.
    pub fn from_code<S: Into<String>>(code: S) -> Self {
        let code = code.into();
        if code.is_empty() {
            return NumberFormat::General;
        }
        match Self::builtin_id(&code) {
            Some(0) => NumberFormat::General,
            Some(id) => NumberFormat::BuiltIn(id),
            None => NumberFormat::Custom(code),
        }
    }

    /// Create a built-in format by ID
    pub fn from_id(id: u16) -> Self {
        NumberFormat::BuiltIn(id)
    }

    /// Look up the built-in id of a format code
    pub fn builtin_id(code: &str) -> Option<u16> {
        BUILTIN_FORMATS
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(id, _)| *id)
    }

    /// Get the format code
    pub fn format_code(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => Self::builtin_format_code(*id),
            NumberFormat::Custom(s) => s,
        }
    }

    /// Get built-in format code by ID
    pub fn builtin_format_code(id: u16) -> &'static str {
        BUILTIN_FORMATS
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, code)| *code)
            .unwrap_or("General")
    }
}
