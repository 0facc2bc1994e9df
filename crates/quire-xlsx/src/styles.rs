//! `xl/styles.xml`
//!
//! Every section is driven by the indices the finalization pass stored on
//! the formats: a font, fill, border or custom number format is written by
//! the one format that introduced it (`has_font` and friends), in cell XF
//! order, so the n-th record written is the one index n refers to.

use quire_core::style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, DiagonalDirection, FillStyle,
    FinalizationSummary, FontStyle, FontVerticalAlign, Format, FormatRegistry,
    HorizontalAlignment, PatternType, ReadingOrder, Underline, VerticalAlignment,
    DEFAULT_FONT_NAME,
};

use crate::xml::XmlWriter;

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// Theme color used by fonts without an explicit color
const DEFAULT_FONT_THEME: u8 = 1;

/// Serialize the style sheet of a finalized workbook
pub(crate) fn write_styles(formats: &FormatRegistry, summary: &FinalizationSummary) -> String {
    let mut xml = XmlWriter::new();
    xml.start_tag("styleSheet", &[("xmlns", &SPREADSHEETML_NS)]);

    write_num_fmts(&mut xml, formats, summary);
    write_fonts(&mut xml, formats, summary);
    write_fills(&mut xml, formats, summary);
    write_borders(&mut xml, formats, summary);
    write_cell_style_xfs(&mut xml);
    write_cell_xfs(&mut xml, formats, summary);
    write_cell_styles(&mut xml);
    write_dxfs(&mut xml, formats, summary);
    write_table_styles(&mut xml);

    xml.end_tag("styleSheet");
    xml.into_string()
}

fn write_num_fmts(xml: &mut XmlWriter, formats: &FormatRegistry, summary: &FinalizationSummary) {
    if summary.num_format_count == 0 {
        return;
    }

    xml.start_tag("numFmts", &[("count", &summary.num_format_count)]);
    for format in formats.xf_formats().filter(|f| f.indices.has_num_format) {
        write_num_fmt(xml, format);
    }
    xml.end_tag("numFmts");
}

fn write_num_fmt(xml: &mut XmlWriter, format: &Format) {
    xml.empty_tag(
        "numFmt",
        &[
            ("numFmtId", &format.indices.num_format_index),
            ("formatCode", &format.style.number_format.format_code()),
        ],
    );
}

fn write_fonts(xml: &mut XmlWriter, formats: &FormatRegistry, summary: &FinalizationSummary) {
    xml.start_tag("fonts", &[("count", &summary.font_count)]);
    for format in formats.xf_formats().filter(|f| f.indices.has_font) {
        write_font(xml, &format.style.font, false);
    }
    xml.end_tag("fonts");
}

/// Write a `<font>`. Differential fonts only carry the properties a
/// conditional format can change.
fn write_font(xml: &mut XmlWriter, font: &FontStyle, is_dxf: bool) {
    xml.start_tag("font", &[]);

    if font.bold {
        xml.empty_tag("b", &[]);
    }
    if font.italic {
        xml.empty_tag("i", &[]);
    }
    if font.strikethrough {
        xml.empty_tag("strike", &[]);
    }
    if font.outline && !is_dxf {
        xml.empty_tag("outline", &[]);
    }
    if font.shadow && !is_dxf {
        xml.empty_tag("shadow", &[]);
    }
    match font.underline {
        Underline::None => {}
        Underline::Single => xml.empty_tag("u", &[]),
        Underline::Double => xml.empty_tag("u", &[("val", &"double")]),
        Underline::SingleAccounting => xml.empty_tag("u", &[("val", &"singleAccounting")]),
        Underline::DoubleAccounting => xml.empty_tag("u", &[("val", &"doubleAccounting")]),
    }

    if is_dxf {
        if let Some(color) = font.color {
            write_color(xml, "color", color);
        }
        xml.end_tag("font");
        return;
    }

    match font.vertical_align {
        FontVerticalAlign::Baseline => {}
        FontVerticalAlign::Superscript => xml.empty_tag("vertAlign", &[("val", &"superscript")]),
        FontVerticalAlign::Subscript => xml.empty_tag("vertAlign", &[("val", &"subscript")]),
    }
    xml.empty_tag("sz", &[("val", &font.size)]);

    match font.color {
        Some(color) => write_color(xml, "color", color),
        None => xml.empty_tag("color", &[("theme", &DEFAULT_FONT_THEME)]),
    }

    let name = if font.name.is_empty() {
        DEFAULT_FONT_NAME
    } else {
        font.name.as_str()
    };
    xml.empty_tag("name", &[("val", &name)]);
    xml.empty_tag("family", &[("val", &font.family)]);

    // Hyperlink fonts leave the scheme to the cell style.
    if font.is_default_name() && !font.hyperlink {
        xml.empty_tag("scheme", &[("val", &font.scheme_name())]);
    }

    xml.end_tag("font");
}

/// Write a color element: `rgb`, `theme` (+ `tint`), `indexed` or `auto`
fn write_color(xml: &mut XmlWriter, tag: &str, color: Color) {
    match color {
        Color::Rgb { r, g, b } => {
            let rgb = format!("FF{:02X}{:02X}{:02X}", r, g, b);
            xml.empty_tag(tag, &[("rgb", &rgb)]);
        }
        Color::Theme { index, tint: 0 } => xml.empty_tag(tag, &[("theme", &index)]),
        Color::Theme { index, tint } => {
            let tint = f64::from(tint) / 100.0;
            xml.empty_tag(tag, &[("theme", &index), ("tint", &tint)]);
        }
        Color::Indexed(index) => xml.empty_tag(tag, &[("indexed", &index)]),
        Color::Auto => xml.empty_tag(tag, &[("auto", &1)]),
    }
}

fn write_fills(xml: &mut XmlWriter, formats: &FormatRegistry, summary: &FinalizationSummary) {
    xml.start_tag("fills", &[("count", &summary.fill_count)]);

    // Indices 0 and 1 are reserved by Excel.
    write_default_fill(xml, PatternType::None);
    write_default_fill(xml, PatternType::Gray125);

    for format in formats.xf_formats().filter(|f| f.indices.has_fill) {
        write_fill(xml, &format.indices.fill);
    }
    xml.end_tag("fills");
}

fn write_default_fill(xml: &mut XmlWriter, pattern: PatternType) {
    xml.start_tag("fill", &[]);
    xml.empty_tag("patternFill", &[("patternType", &pattern.as_str())]);
    xml.end_tag("fill");
}

/// Write a cell fill, already normalized by the finalization pass
fn write_fill(xml: &mut XmlWriter, fill: &FillStyle) {
    xml.start_tag("fill", &[]);
    if fill.pattern == PatternType::None {
        xml.start_tag("patternFill", &[]);
    } else {
        xml.start_tag("patternFill", &[("patternType", &fill.pattern.as_str())]);
    }

    if let Some(fg) = fill.fg_color {
        write_color(xml, "fgColor", fg);
    }
    match fill.bg_color {
        Some(bg) => write_color(xml, "bgColor", bg),
        None => xml.empty_tag("bgColor", &[("indexed", &64)]),
    }

    xml.end_tag("patternFill");
    xml.end_tag("fill");
}

/// Write a differential fill from the caller's raw colors
fn write_dxf_fill(xml: &mut XmlWriter, format: &Format) {
    let pattern = format.style.fill.pattern;

    xml.start_tag("fill", &[]);
    // Conditional formats treat None and Solid alike.
    if pattern > PatternType::Solid {
        xml.start_tag("patternFill", &[("patternType", &pattern.as_str())]);
    } else {
        xml.start_tag("patternFill", &[]);
    }
    if let Some(fg) = format.indices.dxf_fg_color {
        write_color(xml, "fgColor", fg);
    }
    if let Some(bg) = format.indices.dxf_bg_color {
        write_color(xml, "bgColor", bg);
    }
    xml.end_tag("patternFill");
    xml.end_tag("fill");
}

fn write_borders(xml: &mut XmlWriter, formats: &FormatRegistry, summary: &FinalizationSummary) {
    xml.start_tag("borders", &[("count", &summary.border_count)]);
    for format in formats.xf_formats().filter(|f| f.indices.has_border) {
        write_border(xml, &format.style.border, false);
    }
    xml.end_tag("borders");
}

fn write_border(xml: &mut XmlWriter, border: &BorderStyle, is_dxf: bool) {
    match border.diagonal_direction {
        DiagonalDirection::None => xml.start_tag("border", &[]),
        DiagonalDirection::Up => xml.start_tag("border", &[("diagonalUp", &1)]),
        DiagonalDirection::Down => xml.start_tag("border", &[("diagonalDown", &1)]),
        DiagonalDirection::Both => {
            xml.start_tag("border", &[("diagonalUp", &1), ("diagonalDown", &1)])
        }
    }

    write_sub_border(xml, "left", border.left);
    write_sub_border(xml, "right", border.right);
    write_sub_border(xml, "top", border.top);
    write_sub_border(xml, "bottom", border.bottom);

    if !is_dxf {
        // A diagonal direction without a line style gets a thin line.
        let mut diagonal = border.diagonal;
        if border.diagonal_direction != DiagonalDirection::None
            && diagonal.style == BorderLineStyle::None
        {
            diagonal.style = BorderLineStyle::Thin;
        }
        write_sub_border(xml, "diagonal", diagonal);
    }

    xml.end_tag("border");
}

fn write_sub_border(xml: &mut XmlWriter, tag: &str, edge: BorderEdge) {
    let Some(style) = edge.style.as_str() else {
        xml.empty_tag(tag, &[]);
        return;
    };

    xml.start_tag(tag, &[("style", &style)]);
    write_color(xml, "color", edge.color.unwrap_or(Color::Auto));
    xml.end_tag(tag);
}

fn write_cell_style_xfs(xml: &mut XmlWriter) {
    xml.start_tag("cellStyleXfs", &[("count", &1)]);
    xml.empty_tag(
        "xf",
        &[
            ("numFmtId", &0),
            ("fontId", &0),
            ("fillId", &0),
            ("borderId", &0),
        ],
    );
    xml.end_tag("cellStyleXfs");
}

fn write_cell_xfs(xml: &mut XmlWriter, formats: &FormatRegistry, summary: &FinalizationSummary) {
    xml.start_tag("cellXfs", &[("count", &summary.xf_count)]);
    for format in formats.xf_formats() {
        write_xf(xml, format);
    }
    xml.end_tag("cellXfs");
}

fn write_xf(xml: &mut XmlWriter, format: &Format) {
    let indices = &format.indices;
    let alignment = &format.style.alignment;
    let protection = &format.style.protection;
    let has_alignment = alignment.has_element();
    let has_protection = protection.is_applied();

    let mut attributes: Vec<(&str, &dyn std::fmt::Display)> = Vec::with_capacity(11);
    attributes.extend_from_slice(&[
        ("numFmtId", &indices.num_format_index),
        ("fontId", &indices.font_index),
        ("fillId", &indices.fill_index),
        ("borderId", &indices.border_index),
        ("xfId", &0),
    ]);
    if indices.num_format_index > 0 {
        attributes.push(("applyNumberFormat", &1));
    }
    if indices.font_index > 0 {
        attributes.push(("applyFont", &1));
    }
    if indices.fill_index > 0 {
        attributes.push(("applyFill", &1));
    }
    if indices.border_index > 0 {
        attributes.push(("applyBorder", &1));
    }
    // Bottom vertical alignment is applied without an <alignment> child.
    if alignment.is_applied() {
        attributes.push(("applyAlignment", &1));
    }
    if has_protection {
        attributes.push(("applyProtection", &1));
    }

    if !has_alignment && !has_protection {
        xml.empty_tag("xf", &attributes);
        return;
    }

    xml.start_tag("xf", &attributes);
    if has_alignment {
        write_alignment(xml, alignment);
    }
    if has_protection {
        let mut attributes: Vec<(&str, &dyn std::fmt::Display)> = Vec::with_capacity(2);
        if !protection.locked {
            attributes.push(("locked", &0));
        }
        if protection.hidden {
            attributes.push(("hidden", &1));
        }
        xml.empty_tag("protection", &attributes);
    }
    xml.end_tag("xf");
}

fn write_alignment(xml: &mut XmlWriter, alignment: &Alignment) {
    let mut horizontal = alignment.horizontal;
    let mut shrink = alignment.shrink_to_fit;
    let mut justify_last_line = alignment.justify_last_line;

    // Indent only applies to left, right and distributed text.
    if alignment.indent > 0
        && !matches!(
            horizontal,
            HorizontalAlignment::Left | HorizontalAlignment::Right | HorizontalAlignment::Distributed
        )
    {
        horizontal = HorizontalAlignment::Left;
    }

    // Properties Excel treats as mutually exclusive.
    if alignment.wrap_text
        || matches!(
            horizontal,
            HorizontalAlignment::Fill | HorizontalAlignment::Justify | HorizontalAlignment::Distributed
        )
    {
        shrink = false;
    }
    if horizontal != HorizontalAlignment::Distributed || alignment.indent > 0 {
        justify_last_line = false;
    }

    let rotation = alignment.excel_rotation();
    let horizontal = match horizontal {
        HorizontalAlignment::General => None,
        HorizontalAlignment::Left => Some("left"),
        HorizontalAlignment::Center => Some("center"),
        HorizontalAlignment::Right => Some("right"),
        HorizontalAlignment::Fill => Some("fill"),
        HorizontalAlignment::Justify => Some("justify"),
        HorizontalAlignment::CenterContinuous => Some("centerContinuous"),
        HorizontalAlignment::Distributed => Some("distributed"),
    };
    let vertical = match alignment.vertical {
        None | Some(VerticalAlignment::Bottom) => None,
        Some(VerticalAlignment::Top) => Some("top"),
        Some(VerticalAlignment::Center) => Some("center"),
        Some(VerticalAlignment::Justify) => Some("justify"),
        Some(VerticalAlignment::Distributed) => Some("distributed"),
    };

    let mut attributes: Vec<(&str, &dyn std::fmt::Display)> = Vec::with_capacity(8);
    if let Some(horizontal) = &horizontal {
        attributes.push(("horizontal", horizontal));
    }
    if justify_last_line {
        attributes.push(("justifyLastLine", &1));
    }
    if let Some(vertical) = &vertical {
        attributes.push(("vertical", vertical));
    }

    if alignment.indent > 0 {
        attributes.push(("indent", &alignment.indent));
    }
    if rotation != 0 {
        attributes.push(("textRotation", &rotation));
    }
    if alignment.wrap_text {
        attributes.push(("wrapText", &1));
    }
    if shrink {
        attributes.push(("shrinkToFit", &1));
    }
    match alignment.reading_order {
        ReadingOrder::ContextDependent => {}
        ReadingOrder::LeftToRight => attributes.push(("readingOrder", &1)),
        ReadingOrder::RightToLeft => attributes.push(("readingOrder", &2)),
    }

    if !attributes.is_empty() {
        xml.empty_tag("alignment", &attributes);
    }
}

fn write_cell_styles(xml: &mut XmlWriter) {
    xml.start_tag("cellStyles", &[("count", &1)]);
    xml.empty_tag(
        "cellStyle",
        &[("name", &"Normal"), ("xfId", &0), ("builtinId", &0)],
    );
    xml.end_tag("cellStyles");
}

fn write_dxfs(xml: &mut XmlWriter, formats: &FormatRegistry, summary: &FinalizationSummary) {
    if summary.dxf_count == 0 {
        xml.empty_tag("dxfs", &[("count", &0)]);
        return;
    }

    xml.start_tag("dxfs", &[("count", &summary.dxf_count)]);
    for format in formats.dxf_formats() {
        xml.start_tag("dxf", &[]);
        if format.indices.has_dxf_font {
            write_font(xml, &format.style.font, true);
        }
        if format.indices.num_format_index > 0 {
            write_num_fmt(xml, format);
        }
        if format.indices.has_dxf_fill {
            write_dxf_fill(xml, format);
        }
        if format.indices.has_dxf_border {
            write_border(xml, &format.style.border, true);
        }
        xml.end_tag("dxf");
    }
    xml.end_tag("dxfs");
}

fn write_table_styles(xml: &mut XmlWriter) {
    xml.empty_tag(
        "tableStyles",
        &[
            ("count", &0),
            ("defaultTableStyle", &"TableStyleMedium9"),
            ("defaultPivotStyle", &"PivotStyleLight16"),
        ],
    );
}
