//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`CellData`] - Value plus cell XF index

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::{CellData, CellValue};
