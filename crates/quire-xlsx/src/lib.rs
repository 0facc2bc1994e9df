//! # quire-xlsx
//!
//! XLSX (Office Open XML) writer for quire.
//!
//! [`XlsxWriter`] prepares a [`Workbook`](quire_core::Workbook) and writes
//! its package parts into a deflated zip archive:
//! content types, relationships, one part per worksheet, the workbook,
//! the shared string table, styles and the document properties.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quire_core::Workbook;
//! use quire_xlsx::XlsxWriter;
//!
//! let mut workbook = Workbook::new();
//! let index = workbook.add_worksheet().unwrap();
//! workbook
//!     .worksheet_mut(index)
//!     .unwrap()
//!     .write_string(0, 0, "Hello", None)
//!     .unwrap();
//!
//! XlsxWriter::write_file(&mut workbook, "hello.xlsx").unwrap();
//! ```

mod content_types;
mod doc_props;
pub mod error;
mod relationships;
mod shared_strings;
mod styles;
mod workbook;
mod worksheet;
mod writer;
mod xml;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
