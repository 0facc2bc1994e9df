//! `docProps/core.xml` and `docProps/app.xml`

use chrono::{DateTime, Utc};
use quire_core::DocProperties;

use crate::xml::XmlWriter;

const CORE_PROPERTIES_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const EXTENDED_PROPERTIES_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
const VT_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";

/// W3CDTF, always in UTC
fn w3c_datetime(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Serialize the core properties. `now` stands in for an unset
/// creation time.
pub(crate) fn write_core(props: &DocProperties, now: DateTime<Utc>) -> String {
    let mut xml = XmlWriter::new();
    xml.start_tag(
        "cp:coreProperties",
        &[
            ("xmlns:cp", &CORE_PROPERTIES_NS),
            ("xmlns:dc", &"http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", &"http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", &"http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", &"http://www.w3.org/2001/XMLSchema-instance"),
        ],
    );

    let author = props.author.as_deref().unwrap_or("");
    if let Some(title) = &props.title {
        xml.data_element("dc:title", title, &[]);
    }
    if let Some(subject) = &props.subject {
        xml.data_element("dc:subject", subject, &[]);
    }
    xml.data_element("dc:creator", author, &[]);
    if let Some(keywords) = &props.keywords {
        xml.data_element("cp:keywords", keywords, &[]);
    }
    if let Some(comments) = &props.comments {
        xml.data_element("dc:description", comments, &[]);
    }
    xml.data_element("cp:lastModifiedBy", author, &[]);

    let created = w3c_datetime(&props.created.unwrap_or(now));
    xml.data_element(
        "dcterms:created",
        &created,
        &[("xsi:type", &"dcterms:W3CDTF")],
    );
    xml.data_element(
        "dcterms:modified",
        &created,
        &[("xsi:type", &"dcterms:W3CDTF")],
    );

    if let Some(category) = &props.category {
        xml.data_element("cp:category", category, &[]);
    }
    if let Some(status) = &props.status {
        xml.data_element("cp:contentStatus", status, &[]);
    }

    xml.end_tag("cp:coreProperties");
    xml.into_string()
}

/// Serialize the extended (application) properties
pub(crate) fn write_app<'a>(
    props: &DocProperties,
    sheet_names: impl ExactSizeIterator<Item = &'a str>,
) -> String {
    let sheet_count = sheet_names.len();

    let mut xml = XmlWriter::new();
    xml.start_tag(
        "Properties",
        &[("xmlns", &EXTENDED_PROPERTIES_NS), ("xmlns:vt", &VT_NS)],
    );
    xml.data_element("Application", "Microsoft Excel", &[]);
    xml.data_element("DocSecurity", "0", &[]);
    xml.data_element("ScaleCrop", "false", &[]);

    xml.start_tag("HeadingPairs", &[]);
    xml.start_tag("vt:vector", &[("size", &2), ("baseType", &"variant")]);
    xml.start_tag("vt:variant", &[]);
    xml.data_element("vt:lpstr", "Worksheets", &[]);
    xml.end_tag("vt:variant");
    xml.start_tag("vt:variant", &[]);
    xml.data_element("vt:i4", &sheet_count.to_string(), &[]);
    xml.end_tag("vt:variant");
    xml.end_tag("vt:vector");
    xml.end_tag("HeadingPairs");

    xml.start_tag("TitlesOfParts", &[]);
    xml.start_tag(
        "vt:vector",
        &[("size", &sheet_count), ("baseType", &"lpstr")],
    );
    for name in sheet_names {
        xml.data_element("vt:lpstr", name, &[]);
    }
    xml.end_tag("vt:vector");
    xml.end_tag("TitlesOfParts");

    if let Some(manager) = &props.manager {
        xml.data_element("Manager", manager, &[]);
    }
    xml.data_element("Company", props.company.as_deref().unwrap_or(""), &[]);
    xml.data_element("LinksUpToDate", "false", &[]);
    xml.data_element("SharedDoc", "false", &[]);
    xml.data_element("HyperlinksChanged", "false", &[]);
    xml.data_element("AppVersion", "12.0000", &[]);
    xml.end_tag("Properties");
    xml.into_string()
}
