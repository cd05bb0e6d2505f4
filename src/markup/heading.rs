//! Headings that step up one level per toggle.
//!
//! A plain line becomes `## `, then `###`, then `####`; the next toggle
//! drops the heading entirely. Levels past four are not offered.

use tracing::debug;

use super::ToggleResult;
use super::multiline::BlockPadding;
use crate::text::Selection;
use crate::text::span::{concat, encode, line_start, unit};

const MAX_LEVEL: usize = 4;
/// Length of the `#### ` marker plus the `#` the cycle would add next.
const STRIP_LEN: usize = 5;

/// Step the heading level of the line holding `selection.start`.
///
/// # Panics
///
/// Panics if `selection` does not fit inside `text`.
pub fn toggle_heading(text: &str, selection: Selection) -> ToggleResult {
    let units = encode(text);
    assert!(
        selection.end <= units.len(),
        "selection {}..{} outside buffer of {} UTF-16 units",
        selection.start,
        selection.end,
        units.len()
    );
    let hash = unit('#');

    // Existing markers live at the start of the line, which may be before
    // the selection.
    let mut region_start = selection.start;
    if selection.start > 0 {
        let line = line_start(&units, selection.start);
        if units.get(line) == Some(&hash) {
            region_start = line;
        }
    }
    let region = &units[region_start..selection.end];
    let level = region.iter().take_while(|&&u| u == hash).count();

    if level >= MAX_LEVEL {
        let removed = STRIP_LEN.min(region.len());
        debug!(level, "removing heading");
        let retreat = |offset: usize| {
            if offset >= region_start + removed {
                offset - removed
            } else {
                offset.min(region_start)
            }
        };
        return ToggleResult::from_units(
            &concat(&[&units[..region_start], &region[removed..], &units[selection.end..]]),
            retreat(selection.start),
            retreat(selection.end),
        );
    }

    if level > 0 {
        debug!(level = level + 1, "raising heading level");
        return ToggleResult::from_units(
            &concat(&[&units[..region_start], &[hash], region, &units[selection.end..]]),
            selection.start + 1,
            selection.end + 1,
        );
    }

    debug!("inserting heading");
    let padding = BlockPadding::around(&units, selection);
    let leading = padding.leading();
    let marker = encode("## ");
    let shift = leading.len() + marker.len();
    ToggleResult::from_units(
        &concat(&[
            &units[..selection.start],
            &leading,
            &marker,
            region,
            &padding.trailing(),
            &units[selection.end..],
        ]),
        selection.start + shift,
        selection.end + shift,
    )
}
