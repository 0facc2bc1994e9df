//! `xl/sharedStrings.xml`

use quire_core::SharedStringTable;

use crate::xml::XmlWriter;

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// Serialize the shared string table.
///
/// Strings are written in index order; `count` is the total number of
/// string cells and `uniqueCount` the number of `<si>` entries.
pub(crate) fn write_shared_strings(sst: &SharedStringTable) -> String {
    let mut xml = XmlWriter::new();
    xml.start_tag(
        "sst",
        &[
            ("xmlns", &SPREADSHEETML_NS),
            ("count", &sst.string_count()),
            ("uniqueCount", &sst.unique_count()),
        ],
    );

    for text in sst {
        xml.start_tag("si", &[]);
        if needs_preserve(text) {
            xml.data_element("t", text, &[("xml:space", &"preserve")]);
        } else {
            xml.data_element("t", text, &[]);
        }
        xml.end_tag("si");
    }

    xml.end_tag("sst");
    xml.into_string()
}

/// Leading or trailing whitespace is dropped by readers unless preserved
fn needs_preserve(text: &str) -> bool {
    let ascii_space = |c: char| c.is_ascii_whitespace() || c == '\x0B';
    text.starts_with(ascii_space) || text.ends_with(ascii_space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XML_DECLARATION;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_and_order() {
        let mut sst = SharedStringTable::new();
        sst.intern("neptune").unwrap();
        sst.intern("mars").unwrap();
        sst.intern("neptune").unwrap();

        assert_eq!(
            write_shared_strings(&sst),
            format!(
                "{}<sst xmlns=\"{}\" count=\"3\" uniqueCount=\"2\">\
                 <si><t>neptune</t></si><si><t>mars</t></si></sst>",
                XML_DECLARATION, SPREADSHEETML_NS
            )
        );
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let mut sst = SharedStringTable::new();
        sst.intern(" lead").unwrap();
        sst.intern("trail\t").unwrap();
        sst.intern("in side").unwrap();

        let xml = write_shared_strings(&sst);
        assert!(xml.contains("<si><t xml:space=\"preserve\"> lead</t></si>"));
        assert!(xml.contains("<si><t xml:space=\"preserve\">trail\t</t></si>"));
        assert!(xml.contains("<si><t>in side</t></si>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut sst = SharedStringTable::new();
        sst.intern("R&D <draft>").unwrap();

        assert!(write_shared_strings(&sst).contains("<t>R&amp;D &lt;draft&gt;</t>"));
    }
}
