//! Fill/background style types

use super::Color;

/// Pattern fill for cell background
///
/// Colors are raw, as the caller set them. Excel's conventions for solid
/// fills are applied by [`FillStyle::normalized`] during finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FillStyle {
    /// Pattern type
    pub pattern: PatternType,
    /// Foreground (pattern) color
    pub fg_color: Option<Color>,
    /// Background color
    pub bg_color: Option<Color>,
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: PatternType::Solid,
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, fg_color: Color, bg_color: Color) -> Self {
        Self {
            pattern,
            fg_color: Some(fg_color),
            bg_color: Some(bg_color),
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        self.pattern == PatternType::None && self.fg_color.is_none() && self.bg_color.is_none()
    }

    /// Apply Excel's solid-fill conventions.
    ///
    /// 1. A solid fill with both colors set has its colors swapped, since
    ///    Excel reverses the roles of fg and bg for solid patterns.
    /// 2. A bg color without fg color and with pattern `None`/`Solid`
    ///    becomes a solid fill with that color as fg.
    /// 3. An fg color without bg color and with pattern `None`/`Solid`
    ///    becomes a solid fill.
    pub fn normalized(&self) -> FillStyle {
        let mut fill = *self;

        if fill.pattern == PatternType::Solid && fill.bg_color.is_some() && fill.fg_color.is_some()
        {
            std::mem::swap(&mut fill.fg_color, &mut fill.bg_color);
        }

        if fill.pattern <= PatternType::Solid && fill.bg_color.is_some() && fill.fg_color.is_none()
        {
            fill.fg_color = fill.bg_color.take();
            fill.pattern = PatternType::Solid;
        }

        if fill.pattern <= PatternType::Solid && fill.bg_color.is_none() && fill.fg_color.is_some()
        {
            fill.pattern = PatternType::Solid;
        }

        fill
    }
}

/// Pattern fill types, in Excel's ordinal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// Horizontal stripe
    DarkHorizontal,
    /// Vertical stripe
    DarkVertical,
    /// Diagonal stripe (down)
    DarkDown,
    /// Diagonal stripe (up)
    DarkUp,
    /// Grid
    DarkGrid,
    /// Trellis
    DarkTrellis,
    /// Thin horizontal stripe
    LightHorizontal,
    /// Thin vertical stripe
    LightVertical,
    /// Thin diagonal stripe (down)
    LightDown,
    /// Thin diagonal stripe (up)
    LightUp,
    /// Thin grid
    LightGrid,
    /// Thin trellis
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    /// The `patternType` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Solid => "solid",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkGray => "darkGray",
            PatternType::LightGray => "lightGray",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::DarkVertical => "darkVertical",
            PatternType::DarkDown => "darkDown",
            PatternType::DarkUp => "darkUp",
            PatternType::DarkGrid => "darkGrid",
            PatternType::DarkTrellis => "darkTrellis",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::LightVertical => "lightVertical",
            PatternType::LightDown => "lightDown",
            PatternType::LightUp => "lightUp",
            PatternType::LightGrid => "lightGrid",
            PatternType::LightTrellis => "lightTrellis",
            PatternType::Gray125 => "gray125",
            PatternType::Gray0625 => "gray0625",
        }
    }
}
