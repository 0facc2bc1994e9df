//! `xl/workbook.xml`

use quire_core::Worksheet;

use crate::xml::XmlWriter;

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Serialize the workbook part. Sheet `n` (1-based) is `rIdn` in the
/// workbook relationships.
pub(crate) fn write_workbook<'a>(
    worksheets: impl Iterator<Item = &'a Worksheet>,
    active_sheet: usize,
) -> String {
    let mut xml = XmlWriter::new();
    xml.start_tag(
        "workbook",
        &[("xmlns", &SPREADSHEETML_NS), ("xmlns:r", &RELATIONSHIPS_NS)],
    );

    xml.empty_tag(
        "fileVersion",
        &[
            ("appName", &"xl"),
            ("lastEdited", &4),
            ("lowestEdited", &4),
            ("rupBuild", &4505),
        ],
    );
    xml.empty_tag("workbookPr", &[("defaultThemeVersion", &124226)]);

    xml.start_tag("bookViews", &[]);
    let window: [(&str, &dyn std::fmt::Display); 4] = [
        ("xWindow", &240),
        ("yWindow", &15),
        ("windowWidth", &16095),
        ("windowHeight", &9660),
    ];
    if active_sheet > 0 {
        let mut attributes = window.to_vec();
        attributes.push(("activeTab", &active_sheet));
        xml.empty_tag("workbookView", &attributes);
    } else {
        xml.empty_tag("workbookView", &window);
    }
    xml.end_tag("bookViews");

    xml.start_tag("sheets", &[]);
    for (i, sheet) in worksheets.enumerate() {
        let sheet_id = i + 1;
        let r_id = format!("rId{}", sheet_id);
        xml.empty_tag(
            "sheet",
            &[
                ("name", &sheet.name()),
                ("sheetId", &sheet_id),
                ("r:id", &r_id),
            ],
        );
    }
    xml.end_tag("sheets");

    xml.empty_tag("calcPr", &[("calcId", &124519), ("fullCalcOnLoad", &1)]);
    xml.end_tag("workbook");
    xml.into_string()
}
