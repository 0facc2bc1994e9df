//! Text alignment types

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment; `None` means not set
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text
    pub wrap_text: bool,
    /// Shrink to fit
    pub shrink_to_fit: bool,
    /// Justify the last line of distributed text
    pub justify_last_line: bool,
    /// Indent level (0-250)
    pub indent: u8,
    /// Text rotation in degrees: -90 to 90, or 270 for stacked text
    pub rotation: i16,
    /// Reading order
    pub reading_order: ReadingOrder,
}

impl Alignment {
    /// Create a new default alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Set rotation angle. Accepts -90..=90 or 270; anything else resets to 0.
    pub fn with_rotation(mut self, degrees: i16) -> Self {
        if degrees == 270 || (-90..=90).contains(&degrees) {
            self.rotation = degrees;
        } else {
            log::warn!("rotation {degrees} outside -90..=90 (or 270); reset to 0");
            self.rotation = 0;
        }
        self
    }

    /// Rotation as stored in the `textRotation` attribute
    pub fn excel_rotation(&self) -> i16 {
        match self.rotation {
            270 => 255,
            r if r < 0 => -r + 90,
            r => r,
        }
    }

    /// Whether the xf needs `applyAlignment="1"`
    pub fn is_applied(&self) -> bool {
        self.horizontal != HorizontalAlignment::General
            || self.vertical.is_some()
            || self.indent != 0
            || self.rotation != 0
            || self.wrap_text
            || self.shrink_to_fit
            || self.reading_order != ReadingOrder::ContextDependent
    }

    /// Whether the xf needs an `<alignment>` child element.
    ///
    /// Bottom is Excel's default vertical alignment, so it is applied
    /// without being written out.
    pub fn has_element(&self) -> bool {
        self.horizontal != HorizontalAlignment::General
            || !matches!(self.vertical, None | Some(VerticalAlignment::Bottom))
            || self.indent != 0
            || self.rotation != 0
            || self.wrap_text
            || self.shrink_to_fit
            || self.reading_order != ReadingOrder::ContextDependent
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    /// Justify (stretch to fit width)
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Distributed (like justify, but for East Asian text)
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Center aligned
    Center,
    /// Bottom aligned
    Bottom,
    /// Justify
    Justify,
    /// Distributed
    Distributed,
}

/// Reading order for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadingOrder {
    /// Context dependent
    #[default]
    ContextDependent,
    /// Left to right
    LeftToRight,
    /// Right to left
    RightToLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(Alignment::new().with_rotation(45).excel_rotation(), 45);
        assert_eq!(Alignment::new().with_rotation(-45).excel_rotation(), 135);
        assert_eq!(Alignment::new().with_rotation(270).excel_rotation(), 255);
        assert_eq!(Alignment::new().with_rotation(180).rotation, 0);
    }

    #[test]
    fn test_bottom_is_applied_but_not_written() {
        let al = Alignment::new().with_vertical(VerticalAlignment::Bottom);
        assert!(al.is_applied());
        assert!(!al.has_element());

        let al = Alignment::new().with_vertical(VerticalAlignment::Top);
        assert!(al.has_element());
    }
}
