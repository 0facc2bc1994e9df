//! End-to-end tests for XLSX output (build -> save -> unzip -> parse parts)

use std::collections::HashMap;
use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use quire::prelude::*;

fn save_to_vec(workbook: &mut Workbook) -> Vec<u8> {
    let mut buf = Vec::new();
    XlsxWriter::write(workbook, Cursor::new(&mut buf)).unwrap();
    buf
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn attribute(element: &BytesStart<'_>, key: &str) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key.as_bytes())
        .map(|a| a.unescape_value().unwrap().into_owned())
}

/// A parsed `<c>` element
#[derive(Debug, Default, Clone, PartialEq)]
struct ParsedCell {
    style: Option<String>,
    cell_type: Option<String>,
    formula: Option<String>,
    value: Option<String>,
}

/// Cells of a worksheet part, keyed by reference
fn parse_cells(xml: &str) -> HashMap<String, ParsedCell> {
    let mut reader = Reader::from_str(xml);
    let mut cells = HashMap::new();
    let mut current: Option<(String, ParsedCell)> = None;
    let mut text_target: Option<&'static str> = None;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"c" => {
                let cell = ParsedCell {
                    style: attribute(&e, "s"),
                    cell_type: attribute(&e, "t"),
                    ..Default::default()
                };
                current = Some((attribute(&e, "r").unwrap(), cell));
            }
            Event::Empty(e) if e.name().as_ref() == b"c" => {
                let cell = ParsedCell {
                    style: attribute(&e, "s"),
                    cell_type: attribute(&e, "t"),
                    ..Default::default()
                };
                cells.insert(attribute(&e, "r").unwrap(), cell);
            }
            Event::Start(e) if e.name().as_ref() == b"v" => text_target = Some("v"),
            Event::Start(e) if e.name().as_ref() == b"f" => text_target = Some("f"),
            Event::Text(t) => {
                if let (Some(target), Some((_, cell))) = (text_target, current.as_mut()) {
                    let text = t.unescape().unwrap().into_owned();
                    match target {
                        "v" => cell.value = Some(text),
                        _ => cell.formula = Some(text),
                    }
                }
            }
            Event::End(e) if e.name().as_ref() == b"c" => {
                if let Some((reference, cell)) = current.take() {
                    cells.insert(reference, cell);
                }
            }
            Event::End(_) => text_target = None,
            Event::Eof => break,
            _ => {}
        }
    }
    cells
}

/// `<si>` strings of the shared string part, in index order
fn parse_shared_strings(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut strings = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"t" => {
                in_text = true;
                strings.push(String::new());
            }
            Event::Text(t) if in_text => {
                if let Some(last) = strings.last_mut() {
                    last.push_str(&t.unescape().unwrap());
                }
            }
            Event::End(e) if e.name().as_ref() == b"t" => in_text = false,
            Event::Eof => break,
            _ => {}
        }
    }
    strings
}

/// `count` attribute of a top-level style table, e.g. `cellXfs`
fn table_count(styles: &str, table: &str) -> Option<u32> {
    let mut reader = Reader::from_str(styles);
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == table.as_bytes() => {
                return attribute(&e, "count").and_then(|c| c.parse().ok());
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}

/// Number of direct children of a style table
fn table_len(styles: &str, table: &str, child: &str) -> usize {
    let mut reader = Reader::from_str(styles);
    let mut depth_in_table: Option<usize> = None;
    let mut count = 0;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                if e.name().as_ref() == table.as_bytes() {
                    depth_in_table = Some(0);
                } else if let Some(depth) = depth_in_table.as_mut() {
                    if *depth == 0 && e.name().as_ref() == child.as_bytes() {
                        count += 1;
                    }
                    *depth += 1;
                }
            }
            Event::Empty(e) => {
                if depth_in_table == Some(0) && e.name().as_ref() == child.as_bytes() {
                    count += 1;
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == table.as_bytes() {
                    return count;
                }
                if let Some(depth) = depth_in_table.as_mut() {
                    *depth -= 1;
                }
            }
            Event::Eof => return count,
            _ => {}
        }
    }
}

#[test]
fn test_cell_values() {
    let mut wb = Workbook::new();
    let index = wb.add_worksheet().unwrap();
    {
        let mut sheet = wb.worksheet_mut(index).unwrap();
        sheet.write_string(0, 0, "Hello", None).unwrap();
        sheet.write_number(0, 1, 42.0, None).unwrap();
        sheet.write_number(0, 2, 0.1, None).unwrap();
        sheet.write_boolean(1, 0, true, None).unwrap();
        sheet.write_formula(1, 1, "=B1*2", None).unwrap();
        sheet.write_string(2, 0, "Hello", None).unwrap();
    }

    let bytes = save_to_vec(&mut wb);
    let cells = parse_cells(&read_part(&bytes, "xl/worksheets/sheet1.xml"));

    assert_eq!(cells["A1"].cell_type.as_deref(), Some("s"));
    assert_eq!(cells["A1"].value.as_deref(), Some("0"));
    assert_eq!(cells["A3"].value.as_deref(), Some("0"));
    assert_eq!(cells["B1"].value.as_deref(), Some("42"));
    assert_eq!(cells["C1"].value.as_deref(), Some("0.1"));
    assert_eq!(cells["A2"].cell_type.as_deref(), Some("b"));
    assert_eq!(cells["A2"].value.as_deref(), Some("1"));
    assert_eq!(cells["B2"].formula.as_deref(), Some("B1*2"));
    assert_eq!(cells["B2"].value.as_deref(), Some("0"));

    let strings = parse_shared_strings(&read_part(&bytes, "xl/sharedStrings.xml"));
    assert_eq!(strings, vec!["Hello".to_string()]);
}

#[test]
fn test_shared_string_indices_follow_first_use() {
    let mut wb = Workbook::new();
    let first = wb.add_worksheet().unwrap();
    let second = wb.add_worksheet().unwrap();
    wb.worksheet_mut(second)
        .unwrap()
        .write_string(0, 0, "beta", None)
        .unwrap();
    {
        let mut sheet = wb.worksheet_mut(first).unwrap();
        sheet.write_string(0, 0, "alpha", None).unwrap();
        sheet.write_string(0, 1, "beta", None).unwrap();
        sheet.write_string(0, 2, " padded ", None).unwrap();
    }

    let bytes = save_to_vec(&mut wb);
    let strings = parse_shared_strings(&read_part(&bytes, "xl/sharedStrings.xml"));
    assert_eq!(strings, vec!["beta", "alpha", " padded "]);

    let sheet1 = parse_cells(&read_part(&bytes, "xl/worksheets/sheet1.xml"));
    assert_eq!(sheet1["A1"].value.as_deref(), Some("1"));
    assert_eq!(sheet1["B1"].value.as_deref(), Some("0"));
    assert_eq!(sheet1["C1"].value.as_deref(), Some("2"));
}

#[test]
fn test_style_tables_are_deduplicated() {
    let mut wb = Workbook::new();
    let bold_red = wb.add_format(Style::new().bold(true).font_color(Color::RED));
    let bold_red_filled = wb.add_format(
        Style::new()
            .bold(true)
            .font_color(Color::RED)
            .fill_color(Color::YELLOW),
    );
    let bordered = wb.add_format(Style::new().border(BorderLineStyle::Thin));
    let money = wb.add_format(Style::new().number_format("$#,##0.00"));
    let money_again = wb.add_format(Style::new().number_format("$#,##0.00").italic(true));
    let index = wb.add_worksheet().unwrap();
    {
        let mut sheet = wb.worksheet_mut(index).unwrap();
        sheet.write_string(0, 0, "a", Some(bold_red)).unwrap();
        sheet.write_string(1, 0, "b", Some(bold_red_filled)).unwrap();
        sheet.write_number(2, 0, 1.0, Some(bordered)).unwrap();
        sheet.write_number(3, 0, 2.0, Some(money)).unwrap();
        sheet.write_number(4, 0, 3.0, Some(money_again)).unwrap();
    }

    let bytes = save_to_vec(&mut wb);
    let styles = read_part(&bytes, "xl/styles.xml");

    // default, bold red, italic
    assert_eq!(table_count(&styles, "fonts"), Some(3));
    assert_eq!(table_len(&styles, "fonts", "font"), 3);
    // none, gray125, yellow
    assert_eq!(table_count(&styles, "fills"), Some(3));
    assert_eq!(table_len(&styles, "fills", "fill"), 3);
    // none, thin
    assert_eq!(table_count(&styles, "borders"), Some(2));
    assert_eq!(table_len(&styles, "borders", "border"), 2);
    // one custom format shared by two xfs
    assert_eq!(table_count(&styles, "numFmts"), Some(1));
    assert_eq!(table_len(&styles, "numFmts", "numFmt"), 1);
    // default plus five distinct formats
    assert_eq!(table_count(&styles, "cellXfs"), Some(6));
    assert_eq!(table_len(&styles, "cellXfs", "xf"), 6);

    let cells = parse_cells(&read_part(&bytes, "xl/worksheets/sheet1.xml"));
    assert_eq!(cells["A1"].style.as_deref(), Some("1"));
    assert_eq!(cells["A5"].style.as_deref(), Some("5"));
}

#[test]
fn test_conditional_format_dxf() {
    let mut wb = Workbook::new();
    let highlight = wb.add_format(Style::new().font_color(Color::RED).fill_color(Color::YELLOW));
    let index = wb.add_worksheet().unwrap();
    {
        let mut sheet = wb.worksheet_mut(index).unwrap();
        for row in 0..5 {
            sheet.write_number(row, 0, f64::from(row) * 50.0, None).unwrap();
        }
        sheet
            .conditional_format(
                CellRange::parse("A1:A5").unwrap(),
                ConditionalFormatRule::cell_is_greater_than("100").with_format(highlight),
            )
            .unwrap();
    }

    let bytes = save_to_vec(&mut wb);

    let styles = read_part(&bytes, "xl/styles.xml");
    assert_eq!(table_count(&styles, "dxfs"), Some(1));
    assert_eq!(table_len(&styles, "dxfs", "dxf"), 1);
    // the format is only used as a dxf
    assert_eq!(table_count(&styles, "cellXfs"), Some(1));

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(
        "<conditionalFormatting sqref=\"A1:A5\">\
         <cfRule type=\"cellIs\" dxfId=\"0\" priority=\"1\" operator=\"greaterThan\">\
         <formula>100</formula></cfRule></conditionalFormatting>"
    ));
}

#[test]
fn test_save_with_properties() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    let mut wb = Workbook::new();
    wb.set_properties(
        DocProperties::new()
            .with_title("Quarterly")
            .with_company("Acme & Co"),
    );
    wb.add_worksheet_with_name("Summary").unwrap();
    wb.add_worksheet_with_name("Detail").unwrap();
    wb.set_active_sheet(1).unwrap();
    wb.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(read_part(&bytes, "docProps/core.xml").contains("<dc:title>Quarterly</dc:title>"));

    let app = read_part(&bytes, "docProps/app.xml");
    assert!(app.contains("<Company>Acme &amp; Co</Company>"));
    assert!(app.contains("<vt:lpstr>Summary</vt:lpstr><vt:lpstr>Detail</vt:lpstr>"));

    assert!(read_part(&bytes, "xl/workbook.xml").contains("activeTab=\"1\""));
    assert!(read_part(&bytes, "xl/worksheets/sheet2.xml").contains("tabSelected=\"1\""));
    assert!(!read_part(&bytes, "xl/worksheets/sheet1.xml").contains("tabSelected"));
}

#[test]
fn test_strings_rejected_after_save() {
    let mut wb = Workbook::new();
    let index = wb.add_worksheet().unwrap();
    save_to_vec(&mut wb);

    let err = wb
        .worksheet_mut(index)
        .unwrap()
        .write_string(0, 0, "late", None)
        .unwrap_err();
    assert!(matches!(err, Error::SharedStringsFrozen));
}
