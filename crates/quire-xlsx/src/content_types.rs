//! `[Content_Types].xml`

use crate::xml::XmlWriter;

const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const APP_PACKAGE: &str = "application/vnd.openxmlformats-package.";
const APP_DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.";

/// Default and override content types of a package
#[derive(Debug)]
pub(crate) struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Content types every workbook package has
    pub(crate) fn new() -> Self {
        let mut types = Self {
            defaults: Vec::new(),
            overrides: Vec::new(),
        };
        types.add_default("rels", &format!("{APP_PACKAGE}relationships+xml"));
        types.add_default("xml", "application/xml");
        types.add_override(
            "/docProps/app.xml",
            &format!("{APP_DOCUMENT}extended-properties+xml"),
        );
        types.add_override(
            "/docProps/core.xml",
            &format!("{APP_PACKAGE}core-properties+xml"),
        );
        types.add_override(
            "/xl/styles.xml",
            &format!("{APP_DOCUMENT}spreadsheetml.styles+xml"),
        );
        types.add_override(
            "/xl/workbook.xml",
            &format!("{APP_DOCUMENT}spreadsheetml.sheet.main+xml"),
        );
        types
    }

    fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .push((extension.to_string(), content_type.to_string()));
    }

    fn add_override(&mut self, part_name: &str, content_type: &str) {
        self.overrides
            .push((part_name.to_string(), content_type.to_string()));
    }

    /// Add `/xl/worksheets/sheet{index}.xml` (1-based)
    pub(crate) fn add_worksheet(&mut self, index: usize) {
        self.add_override(
            &format!("/xl/worksheets/sheet{index}.xml"),
            &format!("{APP_DOCUMENT}spreadsheetml.worksheet+xml"),
        );
    }

    /// Add the shared string table part
    pub(crate) fn add_shared_strings(&mut self) {
        self.add_override(
            "/xl/sharedStrings.xml",
            &format!("{APP_DOCUMENT}spreadsheetml.sharedStrings+xml"),
        );
    }

    /// Serialize the content types
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new();
        xml.start_tag("Types", &[("xmlns", &CONTENT_TYPES_NS)]);
        for (extension, content_type) in &self.defaults {
            xml.empty_tag(
                "Default",
                &[("Extension", extension), ("ContentType", content_type)],
            );
        }
        for (part_name, content_type) in &self.overrides {
            xml.empty_tag(
                "Override",
                &[("PartName", part_name), ("ContentType", content_type)],
            );
        }
        xml.end_tag("Types");
        xml.into_string()
    }
}
