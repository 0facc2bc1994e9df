//! `xl/worksheets/sheetN.xml`

use std::collections::BTreeMap;

use quire_core::cell::{CellAddress, CellData, CellValue};
use quire_core::conditional_format::{CfRuleType, ConditionalFormat};
use quire_core::Worksheet;

use crate::xml::XmlWriter;

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Rows share one `spans` value per block of this many rows
const SPAN_BLOCK_ROWS: u32 = 16;

/// Serialize a worksheet; `selected` marks the active tab
pub(crate) fn write_worksheet(sheet: &Worksheet, selected: bool) -> String {
    let mut xml = XmlWriter::new();
    xml.start_tag(
        "worksheet",
        &[("xmlns", &SPREADSHEETML_NS), ("xmlns:r", &RELATIONSHIPS_NS)],
    );

    let dimension = sheet
        .dimension()
        .map_or_else(|| "A1".to_string(), |range| range.to_string());
    xml.empty_tag("dimension", &[("ref", &dimension)]);

    xml.start_tag("sheetViews", &[]);
    if selected {
        xml.empty_tag("sheetView", &[("tabSelected", &1), ("workbookViewId", &0)]);
    } else {
        xml.empty_tag("sheetView", &[("workbookViewId", &0)]);
    }
    xml.end_tag("sheetViews");

    xml.empty_tag("sheetFormatPr", &[("defaultRowHeight", &15)]);

    write_sheet_data(&mut xml, sheet);
    write_conditional_formats(&mut xml, sheet.conditional_formats());

    xml.empty_tag(
        "pageMargins",
        &[
            ("left", &0.7),
            ("right", &0.7),
            ("top", &0.75),
            ("bottom", &0.75),
            ("header", &0.3),
            ("footer", &0.3),
        ],
    );

    xml.end_tag("worksheet");
    xml.into_string()
}

fn write_sheet_data(xml: &mut XmlWriter, sheet: &Worksheet) {
    if sheet.is_empty() {
        xml.empty_tag("sheetData", &[]);
        return;
    }

    let spans = row_spans(sheet);
    xml.start_tag("sheetData", &[]);
    for (row, cells) in sheet.rows() {
        let r = row + 1;
        match spans.get(&(row / SPAN_BLOCK_ROWS)) {
            Some(span) => xml.start_tag("row", &[("r", &r), ("spans", span)]),
            None => xml.start_tag("row", &[("r", &r)]),
        }
        for (&col, cell) in cells {
            write_cell(xml, CellAddress::new(row, col), cell);
        }
        xml.end_tag("row");
    }
    xml.end_tag("sheetData");
}

/// `first:last` column span (1-based) of each 16-row block
fn row_spans(sheet: &Worksheet) -> BTreeMap<u32, String> {
    let mut blocks: BTreeMap<u32, (u16, u16)> = BTreeMap::new();
    for (row, cells) in sheet.rows() {
        let (Some(&first), Some(&last)) = (cells.keys().next(), cells.keys().next_back()) else {
            continue;
        };
        blocks
            .entry(row / SPAN_BLOCK_ROWS)
            .and_modify(|(min, max)| {
                *min = (*min).min(first);
                *max = (*max).max(last);
            })
            .or_insert((first, last));
    }

    blocks
        .into_iter()
        .map(|(block, (min, max))| (block, format!("{}:{}", u32::from(min) + 1, u32::from(max) + 1)))
        .collect()
}

fn write_cell(xml: &mut XmlWriter, address: CellAddress, cell: &CellData) {
    let reference = address.to_string();
    let style = cell.xf_index;

    match &cell.value {
        CellValue::Blank => {
            if style > 0 {
                xml.empty_tag("c", &[("r", &reference), ("s", &style)]);
            } else {
                xml.empty_tag("c", &[("r", &reference)]);
            }
        }
        CellValue::Number(value) => {
            start_cell(xml, &reference, style, None);
            xml.data_element("v", &format_number(*value), &[]);
            xml.end_tag("c");
        }
        CellValue::SharedString(index) => {
            start_cell(xml, &reference, style, Some("s"));
            xml.data_element("v", &index.to_string(), &[]);
            xml.end_tag("c");
        }
        CellValue::Boolean(value) => {
            start_cell(xml, &reference, style, Some("b"));
            xml.data_element("v", if *value { "1" } else { "0" }, &[]);
            xml.end_tag("c");
        }
        CellValue::Formula { formula, result } => {
            start_cell(xml, &reference, style, None);
            xml.data_element("f", formula, &[]);
            xml.data_element("v", &format_number(*result), &[]);
            xml.end_tag("c");
        }
    }
}

fn start_cell(xml: &mut XmlWriter, reference: &str, style: u32, cell_type: Option<&str>) {
    match (style > 0, cell_type) {
        (true, Some(t)) => xml.start_tag("c", &[("r", &reference), ("s", &style), ("t", &t)]),
        (true, None) => xml.start_tag("c", &[("r", &reference), ("s", &style)]),
        (false, Some(t)) => xml.start_tag("c", &[("r", &reference), ("t", &t)]),
        (false, None) => xml.start_tag("c", &[("r", &reference)]),
    }
}

fn write_conditional_formats(xml: &mut XmlWriter, formats: &[ConditionalFormat]) {
    for cf in formats {
        let sqref = cf.range.to_string();
        xml.start_tag("conditionalFormatting", &[("sqref", &sqref)]);

        let rule_type = cf.rule.rule_type.xlsx_type();
        let (operator, formulas) = match &cf.rule.rule_type {
            CfRuleType::CellIs {
                operator,
                formula1,
                formula2,
            } => (
                Some(operator.xlsx_operator()),
                [Some(formula1.as_str()), formula2.as_deref()],
            ),
            CfRuleType::Expression { formula } => (None, [Some(formula.as_str()), None]),
        };

        let mut attributes: Vec<(&str, &dyn std::fmt::Display)> = Vec::with_capacity(5);
        attributes.push(("type", &rule_type));
        if let Some(dxf_index) = &cf.dxf_index {
            attributes.push(("dxfId", dxf_index));
        }
        attributes.push(("priority", &cf.priority));
        if cf.rule.stop_if_true {
            attributes.push(("stopIfTrue", &1));
        }
        if let Some(operator) = &operator {
            attributes.push(("operator", operator));
        }

        xml.start_tag("cfRule", &attributes);
        for formula in formulas.into_iter().flatten() {
            xml.data_element("formula", formula, &[]);
        }

        xml.end_tag("cfRule");
        xml.end_tag("conditionalFormatting");
    }
}

/// Format a number with up to 16 significant digits, like C's `%.16g`
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.15e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (15 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XML_DECLARATION;
    use pretty_assertions::assert_eq;
    use quire_core::{CellRange, ConditionalFormatRule, Style, Workbook};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-42.5), "-42.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(123456789.0), "123456789");
        assert_eq!(format_number(1e20), "1e+20");
        assert_eq!(format_number(1.5e-5), "1.5e-05");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(1234567890123456789.0), "1.234567890123457e+18");
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Worksheet::new("Sheet1");

        assert_eq!(
            write_worksheet(&sheet, true),
            format!(
                "{XML_DECLARATION}<worksheet xmlns=\"{SPREADSHEETML_NS}\" xmlns:r=\"{RELATIONSHIPS_NS}\">\
                 <dimension ref=\"A1\"/>\
                 <sheetViews><sheetView tabSelected=\"1\" workbookViewId=\"0\"/></sheetViews>\
                 <sheetFormatPr defaultRowHeight=\"15\"/>\
                 <sheetData/>\
                 <pageMargins left=\"0.7\" right=\"0.7\" top=\"0.75\" bottom=\"0.75\" header=\"0.3\" footer=\"0.3\"/>\
                 </worksheet>"
            )
        );
    }

    #[test]
    fn test_cells() {
        let mut wb = Workbook::new();
        let bold = wb.add_format(Style::new().bold(true));
        wb.add_worksheet().unwrap();
        let mut ws = wb.worksheet_mut(0).unwrap();
        ws.write_string(0, 0, "Name", None).unwrap();
        ws.write_number(0, 2, 3.5, Some(bold)).unwrap();
        ws.write_boolean(1, 1, true, None).unwrap();
        ws.write_formula(2, 0, "=SUM(C1:C2)", None).unwrap();
        ws.write_blank(2, 1, Some(bold)).unwrap();

        let xml = write_worksheet(wb.worksheet(0).unwrap(), false);
        assert!(xml.contains("<dimension ref=\"A1:C3\"/>"));
        assert!(xml.contains("<sheetView workbookViewId=\"0\"/>"));
        assert!(xml.contains(
            "<sheetData>\
             <row r=\"1\" spans=\"1:3\"><c r=\"A1\" t=\"s\"><v>0</v></c><c r=\"C1\" s=\"1\"><v>3.5</v></c></row>\
             <row r=\"2\" spans=\"1:3\"><c r=\"B2\" t=\"b\"><v>1</v></c></row>\
             <row r=\"3\" spans=\"1:3\"><c r=\"A3\"><f>SUM(C1:C2)</f><v>0</v></c><c r=\"B3\" s=\"1\"/></row>\
             </sheetData>"
        ));
    }

    #[test]
    fn test_spans_are_per_block_of_sixteen_rows() {
        let mut wb = Workbook::new();
        wb.add_worksheet().unwrap();
        let mut ws = wb.worksheet_mut(0).unwrap();
        ws.write_number(0, 0, 1.0, None).unwrap();
        ws.write_number(15, 4, 1.0, None).unwrap();
        ws.write_number(16, 1, 1.0, None).unwrap();

        let xml = write_worksheet(wb.worksheet(0).unwrap(), true);
        assert!(xml.contains("<row r=\"1\" spans=\"1:5\">"));
        assert!(xml.contains("<row r=\"16\" spans=\"1:5\">"));
        assert!(xml.contains("<row r=\"17\" spans=\"2:2\">"));
    }

    #[test]
    fn test_formula_text_is_escaped() {
        let mut wb = Workbook::new();
        wb.add_worksheet().unwrap();
        wb.worksheet_mut(0)
            .unwrap()
            .write_formula(0, 0, "IF(A2<1,\"a&b\",\"\")", None)
            .unwrap();

        assert!(write_worksheet(wb.worksheet(0).unwrap(), true)
            .contains("<f>IF(A2&lt;1,\"a&amp;b\",\"\")</f>"));
    }

    #[test]
    fn test_conditional_formatting() {
        let mut wb = Workbook::new();
        let red = wb.add_format(Style::new().font_color(quire_core::style::Color::RED));
        wb.add_worksheet().unwrap();
        let mut ws = wb.worksheet_mut(0).unwrap();
        ws.conditional_format(
            CellRange::parse("A1:A10").unwrap(),
            ConditionalFormatRule::cell_is_between("1", "5").with_format(red),
        )
        .unwrap();
        ws.conditional_format(
            CellRange::parse("B1").unwrap(),
            ConditionalFormatRule::expression("$B1>$A1").with_stop_if_true(true),
        )
        .unwrap();

        let xml = write_worksheet(wb.worksheet(0).unwrap(), true);
        assert!(xml.contains(
            "<sheetData/>\
             <conditionalFormatting sqref=\"A1:A10\">\
             <cfRule type=\"cellIs\" dxfId=\"0\" priority=\"1\" operator=\"between\">\
             <formula>1</formula><formula>5</formula></cfRule></conditionalFormatting>\
             <conditionalFormatting sqref=\"B1\">\
             <cfRule type=\"expression\" priority=\"2\" stopIfTrue=\"1\">\
             <formula>$B1&gt;$A1</formula></cfRule></conditionalFormatting>\
             <pageMargins"
        ));
    }
}
