//! Workbook preparation: strings and formats as the serializers see them

use pretty_assertions::assert_eq;
use quire_core::style::{Color, FillStyle, PatternType, Style};
use quire_core::{CellRange, CellValue, ConditionalFormatRule, Error, Workbook};

#[test]
fn test_strings_across_sheets() {
    let mut wb = Workbook::new();
    let first = wb.add_worksheet().unwrap();
    let second = wb.add_worksheet().unwrap();

    {
        let mut sheet = wb.worksheet_mut(first).unwrap();
        for (col, text) in ["Hello", "World", "Hello"].into_iter().enumerate() {
            sheet.write_string(0, col as u16, text, None).unwrap();
        }
    }
    {
        let mut sheet = wb.worksheet_mut(second).unwrap();
        for (col, text) in ["World", "Foo"].into_iter().enumerate() {
            sheet.write_string(0, col as u16, text, None).unwrap();
        }
    }

    let prepared = wb.prepare().unwrap();
    let sst = prepared.shared_strings();
    assert_eq!(sst.iter().collect::<Vec<_>>(), vec!["Hello", "World", "Foo"]);
    assert_eq!(sst.unique_count(), 3);
    assert_eq!(sst.string_count(), 5);

    let sheets: Vec<_> = prepared.worksheets().collect();
    assert_eq!(
        sheets[1].cell_at(0, 1).map(|c| &c.value),
        Some(&CellValue::SharedString(2))
    );
}

#[test]
fn test_bold_formats_share_a_font() {
    let mut wb = Workbook::new();
    let bold = wb.add_format(Style::new().bold(true).font_size(11.0));
    let bold_copy = wb.add_format(Style::new().bold(true).font_size(11.0).italic(false));
    let plain = wb.add_format(Style::new().font_size(11.0).fill_color(Color::GREEN));
    let index = wb.add_worksheet().unwrap();
    {
        let mut sheet = wb.worksheet_mut(index).unwrap();
        sheet.write_number(0, 0, 1.0, Some(bold)).unwrap();
        sheet.write_number(1, 0, 2.0, Some(bold_copy)).unwrap();
        sheet.write_number(2, 0, 3.0, Some(plain)).unwrap();
    }

    let summary = *wb.prepare().unwrap().summary();
    assert_eq!(summary.font_count, 2);
    assert_eq!(summary.fill_count, 3);
    // bold_copy is structurally equal to bold
    assert_eq!(summary.xf_count, 3);

    let bold = wb.format(bold).unwrap();
    let plain = wb.format(plain).unwrap();
    assert!(bold.indices.has_font);
    assert_eq!(bold.indices.font_index, 1);
    assert_eq!(plain.indices.font_index, 0);
    assert_eq!(plain.indices.fill_index, 2);
    assert_eq!(plain.indices.fill.pattern, PatternType::Solid);
}

#[test]
fn test_prepare_twice_is_stable() {
    let mut wb = Workbook::new();
    let shaded = wb.add_format(Style::new().bg_color(Color::BLUE));
    let index = wb.add_worksheet().unwrap();
    wb.worksheet_mut(index)
        .unwrap()
        .write_blank(0, 0, Some(shaded))
        .unwrap();

    let first = *wb.prepare().unwrap().summary();
    let indices_after_first = wb.format(shaded).unwrap().indices;
    let second = *wb.prepare().unwrap().summary();

    assert_eq!(first, second);
    let format = wb.format(shaded).unwrap();
    assert_eq!(format.indices, indices_after_first);
    assert_eq!(format.indices.fill, FillStyle::solid(Color::BLUE));
    // the caller's style is left as written
    assert_eq!(format.style.fill.fg_color, None);
    assert_eq!(format.style.fill.bg_color, Some(Color::BLUE));
}

#[test]
fn test_cell_and_conditional_format_share_a_solid_fill() {
    let mut wb = Workbook::new();
    let highlight = wb.add_format(
        Style::new()
            .pattern(PatternType::Solid)
            .fg_color(Color::RED)
            .bg_color(Color::BLUE),
    );
    let index = wb.add_worksheet().unwrap();
    {
        let mut sheet = wb.worksheet_mut(index).unwrap();
        sheet.write_number(0, 0, 2.0, Some(highlight)).unwrap();
        sheet
            .conditional_format(
                CellRange::parse("A1:A2").unwrap(),
                ConditionalFormatRule::cell_is_greater_than("1").with_format(highlight),
            )
            .unwrap();
    }

    let first = *wb.prepare().unwrap().summary();
    let indices_after_first = wb.format(highlight).unwrap().indices;
    let second = *wb.prepare().unwrap().summary();

    assert_eq!(first, second);
    let indices = wb.format(highlight).unwrap().indices;
    assert_eq!(indices, indices_after_first);
    assert_eq!(indices.dxf_fg_color, Some(Color::RED));
    assert_eq!(indices.dxf_bg_color, Some(Color::BLUE));
    assert_eq!(indices.fill.fg_color, Some(Color::BLUE));
    assert_eq!(indices.fill.bg_color, Some(Color::RED));
}

#[test]
fn test_editing_a_format_keeps_its_fill_colors() {
    let mut wb = Workbook::new();
    let shaded = wb.add_format(
        Style::new()
            .pattern(PatternType::Solid)
            .fg_color(Color::RED)
            .bg_color(Color::BLUE),
    );
    let index = wb.add_worksheet().unwrap();
    wb.worksheet_mut(index)
        .unwrap()
        .write_blank(0, 0, Some(shaded))
        .unwrap();

    wb.prepare().unwrap();
    let fill_after_first = wb.format(shaded).unwrap().indices.fill;

    wb.format_mut(shaded).unwrap().style.font.italic = true;
    wb.prepare().unwrap();

    let format = wb.format(shaded).unwrap();
    assert!(format.style.font.italic);
    assert_eq!(format.indices.fill, fill_after_first);
    assert_eq!(format.indices.fill.fg_color, Some(Color::BLUE));
    assert_eq!(format.style.fill.fg_color, Some(Color::RED));
}

#[test]
fn test_prepare_adds_default_sheet_and_freezes_strings() {
    let mut wb = Workbook::new();
    assert_eq!(wb.sheet_count(), 0);

    wb.prepare().unwrap();
    assert_eq!(wb.sheet_count(), 1);
    assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
    assert!(wb.shared_strings().is_frozen());

    let err = wb
        .worksheet_mut(0)
        .unwrap()
        .write_string(0, 0, "late", None)
        .unwrap_err();
    assert!(matches!(err, Error::SharedStringsFrozen));
}
