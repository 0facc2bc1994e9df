//! Format finalization pass
//!
//! Runs once per document, right before serialization. It walks the formats
//! in use (cell formats in XF order, conditional formats in DXF order) and
//! assigns the font, fill, border and number format indices that
//! `styles.xml` references, deduplicating each category structurally.
//!
//! The pass writes only the formats' indices, never their styles, so running
//! it again over the same formats gives the same result. All results are
//! staged first and only written back once every step has succeeded, so an
//! error leaves the formats exactly as they were.

use super::dedup::DedupTable;
use super::keys::{BorderKey, FillKey, FontKey};
use super::number_format::FIRST_CUSTOM_NUM_FORMAT_ID;
use super::{Format, FormatId, FormatIndices, NumberFormat, PatternType, Underline};
use crate::error::{Error, Result};

/// Category counts produced by [`finalize_formats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinalizationSummary {
    /// Number of `<font>` records
    pub font_count: u32,
    /// Number of `<fill>` records, the two reserved ones included
    pub fill_count: u32,
    /// Number of `<border>` records
    pub border_count: u32,
    /// Number of custom `<numFmt>` records discovered by cell formats
    pub num_format_count: u32,
    /// Number of cell XF records
    pub xf_count: u32,
    /// Number of differential format records
    pub dxf_count: u32,
}

/// Assign font/fill/border/number format indices to the formats in use.
///
/// `used` lists cell formats in XF order and `used_dxf` lists conditional
/// formats in DXF order. An id may appear in both lists; repeats within one
/// list are ignored.
///
/// Main formats get shared indices plus a `has_*` flag on the first format
/// of each distinct key. Differential formats only get `has_dxf_*` flags and
/// their raw fill colors; they share the number format table with the main
/// formats but never add to `num_format_count`.
pub fn finalize_formats(
    arena: &mut [Format],
    used: &[FormatId],
    used_dxf: &[FormatId],
) -> Result<FinalizationSummary> {
    if let Some(bad) = used
        .iter()
        .chain(used_dxf)
        .find(|id| id.index() >= arena.len())
    {
        return Err(Error::InvalidFormatId(bad.index()));
    }

    let used = unique_ids(used, arena.len())?;
    let used_dxf = unique_ids(used_dxf, arena.len())?;

    let mut staged: Vec<FormatIndices> = Vec::new();
    staged.try_reserve_exact(arena.len())?;
    staged.extend(arena.iter().map(|f| f.indices));

    for id in used.iter().chain(&used_dxf) {
        let prev = staged[id.index()];
        staged[id.index()] = FormatIndices {
            xf_index: prev.xf_index,
            dxf_index: prev.dxf_index,
            ..FormatIndices::default()
        };
    }

    // Fonts
    let mut fonts = DedupTable::new();
    for id in &used {
        let key = FontKey::from(&arena[id.index()].style.font);
        let (index, is_new) = fonts.register_or_find(key)?;
        let out = &mut staged[id.index()];
        out.font_index = index;
        out.has_font = is_new;
    }
    for id in &used_dxf {
        let font = &arena[id.index()].style.font;
        staged[id.index()].has_dxf_font = font.color.is_some()
            || font.bold
            || font.italic
            || font.underline != Underline::None
            || font.strikethrough;
    }

    // Number formats: one table for both sequences
    let mut num_formats = DedupTable::starting_at(u32::from(FIRST_CUSTOM_NUM_FORMAT_ID));
    let mut num_format_count = 0;
    for id in &used {
        let (index, is_new) =
            resolve_num_format(&mut num_formats, &arena[id.index()].style.number_format)?;
        let out = &mut staged[id.index()];
        out.num_format_index = index;
        out.has_num_format = is_new;
        if is_new {
            num_format_count += 1;
        }
    }
    for id in &used_dxf {
        let (index, _) =
            resolve_num_format(&mut num_formats, &arena[id.index()].style.number_format)?;
        staged[id.index()].num_format_index = index;
    }

    // Borders
    let mut borders = DedupTable::new();
    for id in &used {
        let key = BorderKey::from(&arena[id.index()].style.border);
        let (index, is_new) = borders.register_or_find(key)?;
        let out = &mut staged[id.index()];
        out.border_index = index;
        out.has_border = is_new;
    }
    for id in &used_dxf {
        staged[id.index()].has_dxf_border = arena[id.index()].style.border.has_outer_edge();
    }

    // Fills. Differential fills keep the caller's colors.
    for id in &used_dxf {
        let fill = &arena[id.index()].style.fill;
        if fill.pattern != PatternType::None || fill.fg_color.is_some() || fill.bg_color.is_some()
        {
            let out = &mut staged[id.index()];
            out.has_dxf_fill = true;
            out.dxf_fg_color = fill.fg_color;
            out.dxf_bg_color = fill.bg_color;
        }
    }

    let mut fills = DedupTable::new();
    fills.preseed(FillKey::NONE, 0)?;
    fills.preseed(FillKey::GRAY125, 1)?;
    for id in &used {
        let fill = arena[id.index()].style.fill.normalized();
        let (index, is_new) = fills.register_or_find(FillKey::from(&fill))?;
        let out = &mut staged[id.index()];
        out.fill_index = index;
        out.has_fill = is_new;
        out.fill = fill;
    }

    let summary = FinalizationSummary {
        font_count: fonts.next_index(),
        fill_count: fills.next_index(),
        border_count: borders.next_index(),
        num_format_count,
        xf_count: used.len() as u32,
        dxf_count: used_dxf.len() as u32,
    };

    // Commit
    for (format, indices) in arena.iter_mut().zip(staged) {
        format.indices = indices;
    }

    log::debug!(
        "finalized {} cell formats and {} dxf formats: {} fonts, {} fills, {} borders, {} custom number formats",
        summary.xf_count,
        summary.dxf_count,
        summary.font_count,
        summary.fill_count,
        summary.border_count,
        summary.num_format_count,
    );

    Ok(summary)
}

/// Drop repeated ids, keeping first-use order
fn unique_ids(ids: &[FormatId], arena_len: usize) -> Result<Vec<FormatId>> {
    let mut seen: Vec<bool> = Vec::new();
    seen.try_reserve_exact(arena_len)?;
    seen.resize(arena_len, false);

    let mut out = Vec::new();
    out.try_reserve_exact(ids.len())?;
    for id in ids {
        if !seen[id.index()] {
            seen[id.index()] = true;
            out.push(*id);
        }
    }
    Ok(out)
}

/// Map a number format to its `numFmtId`.
///
/// Built-in formats keep their fixed id and never enter the table; custom
/// codes are deduplicated from 164 upwards.
fn resolve_num_format(
    table: &mut DedupTable<String>,
    number_format: &NumberFormat,
) -> Result<(u32, bool)> {
    match number_format {
        NumberFormat::General => Ok((0, false)),
        NumberFormat::BuiltIn(id) => Ok((u32::from(*id), false)),
        NumberFormat::Custom(code) if code.is_empty() => Ok((0, false)),
        NumberFormat::Custom(code) => match NumberFormat::builtin_id(code) {
            Some(id) => Ok((u32::from(id), false)),
            None => table.register_or_find(code.clone()),
        },
    }
}
