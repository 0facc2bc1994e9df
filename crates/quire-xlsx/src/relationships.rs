//! `_rels/.rels` and `xl/_rels/workbook.xml.rels`

use crate::xml::XmlWriter;

const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const DOCUMENT_SCHEMA: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PACKAGE_SCHEMA: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// A relationships part; ids are `rId1`, `rId2`, ... in insertion order
#[derive(Debug, Default)]
pub(crate) struct Relationships {
    entries: Vec<(String, String)>,
}

impl Relationships {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add an office document relationship, e.g. `/worksheet`
    pub(crate) fn add_document(&mut self, kind: &str, target: &str) {
        self.entries
            .push((format!("{DOCUMENT_SCHEMA}{kind}"), target.to_string()));
    }

    /// Add a package relationship, e.g. `/metadata/core-properties`
    pub(crate) fn add_package(&mut self, kind: &str, target: &str) {
        self.entries
            .push((format!("{PACKAGE_SCHEMA}{kind}"), target.to_string()));
    }

    /// Relationships of the package root
    pub(crate) fn root() -> Self {
        let mut rels = Self::new();
        rels.add_document("/officeDocument", "xl/workbook.xml");
        rels.add_package("/metadata/core-properties", "docProps/core.xml");
        rels.add_document("/extended-properties", "docProps/app.xml");
        rels
    }

    /// Relationships of the workbook part: worksheets first, so sheet `n`
    /// is `rIdn`, then styles and the shared strings when present
    pub(crate) fn workbook(sheet_count: usize, has_shared_strings: bool) -> Self {
        let mut rels = Self::new();
        for index in 1..=sheet_count {
            rels.add_document("/worksheet", &format!("worksheets/sheet{index}.xml"));
        }
        rels.add_document("/styles", "styles.xml");
        if has_shared_strings {
            rels.add_document("/sharedStrings", "sharedStrings.xml");
        }
        rels
    }

    pub(crate) fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new();
        xml.start_tag("Relationships", &[("xmlns", &PACKAGE_RELATIONSHIPS_NS)]);
        for (i, (kind, target)) in self.entries.iter().enumerate() {
            let id = format!("rId{}", i + 1);
            xml.empty_tag(
                "Relationship",
                &[("Id", &id), ("Type", kind), ("Target", target)],
            );
        }
        xml.end_tag("Relationships");
        xml.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XML_DECLARATION;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_relationships() {
        assert_eq!(
            Relationships::root().to_xml(),
            format!(
                "{XML_DECLARATION}<Relationships xmlns=\"{PACKAGE_RELATIONSHIPS_NS}\">\
                 <Relationship Id=\"rId1\" Type=\"{DOCUMENT_SCHEMA}/officeDocument\" Target=\"xl/workbook.xml\"/>\
                 <Relationship Id=\"rId2\" Type=\"{PACKAGE_SCHEMA}/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
                 <Relationship Id=\"rId3\" Type=\"{DOCUMENT_SCHEMA}/extended-properties\" Target=\"docProps/app.xml\"/>\
                 </Relationships>"
            )
        );
    }

    #[test]
    fn test_workbook_relationship_ids() {
        let xml = Relationships::workbook(2, true).to_xml();

        assert!(xml.contains("Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet2.xml\""));
        assert!(xml.contains("Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\""));
        assert!(xml.contains("Id=\"rId4\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings\" Target=\"sharedStrings.xml\""));

        assert!(!Relationships::workbook(1, false)
            .to_xml()
            .contains("sharedStrings"));
    }
}
