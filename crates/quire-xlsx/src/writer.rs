//! XLSX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use chrono::Utc;
use quire_core::{PreparedWorkbook, Workbook};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::content_types::ContentTypes;
use crate::doc_props::{write_app, write_core};
use crate::error::XlsxResult;
use crate::relationships::Relationships;
use crate::shared_strings::write_shared_strings;
use crate::styles::write_styles;
use crate::workbook::write_workbook;
use crate::worksheet::write_worksheet;

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &mut Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer.
    ///
    /// The workbook is prepared first: its shared string table is frozen
    /// and its formats are finalized. Parts are written in a fixed order.
    pub fn write<W: Write + Seek>(workbook: &mut Workbook, writer: W) -> XlsxResult<()> {
        let prepared = workbook.prepare()?;
        let summary = prepared.summary();
        let sst = prepared.shared_strings();
        let has_shared_strings = sst.unique_count() > 0;
        let sheet_count = prepared.worksheets().len();

        log::debug!(
            "writing {} worksheet(s), {} unique strings, {} xfs, {} dxfs",
            sheet_count,
            sst.unique_count(),
            summary.xf_count,
            summary.dxf_count
        );

        let options = file_options(&prepared);
        let mut zip = ZipWriter::new(writer);

        // [Content_Types].xml
        let mut content_types = ContentTypes::new();
        for index in 1..=sheet_count {
            content_types.add_worksheet(index);
        }
        if has_shared_strings {
            content_types.add_shared_strings();
        }
        write_part(&mut zip, "[Content_Types].xml", &content_types.to_xml(), options)?;

        // Relationships
        write_part(&mut zip, "_rels/.rels", &Relationships::root().to_xml(), options)?;
        write_part(
            &mut zip,
            "xl/_rels/workbook.xml.rels",
            &Relationships::workbook(sheet_count, has_shared_strings).to_xml(),
            options,
        )?;

        // Worksheets
        let active_sheet = prepared.active_sheet();
        for (i, sheet) in prepared.worksheets().enumerate() {
            write_part(
                &mut zip,
                &format!("xl/worksheets/sheet{}.xml", i + 1),
                &write_worksheet(sheet, i == active_sheet),
                options,
            )?;
        }

        write_part(
            &mut zip,
            "xl/workbook.xml",
            &write_workbook(prepared.worksheets(), active_sheet),
            options,
        )?;

        if has_shared_strings {
            write_part(
                &mut zip,
                "xl/sharedStrings.xml",
                &write_shared_strings(sst),
                options,
            )?;
        }

        write_part(
            &mut zip,
            "xl/styles.xml",
            &write_styles(prepared.formats(), summary),
            options,
        )?;

        // Document properties
        let props = prepared.properties();
        write_part(
            &mut zip,
            "docProps/core.xml",
            &write_core(props, Utc::now()),
            options,
        )?;
        write_part(
            &mut zip,
            "docProps/app.xml",
            &write_app(props, prepared.worksheets().map(|sheet| sheet.name())),
            options,
        )?;

        zip.finish()?;
        Ok(())
    }
}

/// Deflate every part. Entries carry the zip epoch as their timestamp so
/// identical workbooks produce identical archives.
fn file_options(prepared: &PreparedWorkbook<'_>) -> SimpleFileOptions {
    let workbook_options = prepared.options();
    let mut options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .large_file(workbook_options.use_zip64)
        .last_modified_time(zip::DateTime::default());
    if let Some(level) = workbook_options.compression_level {
        options = options.compression_level(Some(level));
    }
    options
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &str,
    options: SimpleFileOptions,
) -> XlsxResult<()> {
    log::trace!("writing part {} ({} bytes)", name, content.len());
    zip.start_file(name, options)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}
