//! Block-level markup: per-line prefixes and delimited blocks.
//!
//! Inserted blocks are padded so that they start after a blank line and are
//! followed by a line break, unless they sit at the start or end of the buffer.

use tracing::debug;

use super::ToggleResult;
use crate::text::Selection;
use crate::text::span::{
    NEWLINE, concat, encode, line_start, newlines_after, newlines_before, split_selection,
};

const NEWLINES_BEFORE_BLOCK: usize = 2;
const NEWLINES_AFTER_BLOCK: usize = 1;

/// Which kind of block markup to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiline<'a> {
    /// A prefix repeated at the start of every line, e.g. `> `.
    Line(&'a str),
    /// A pair of markers enclosing the whole selection, e.g. a code fence.
    Block { prefix: &'a str, suffix: &'a str },
}

/// Newlines to insert before and after a block so it stands apart from
/// its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPadding {
    pub before: usize,
    pub after: usize,
}

impl BlockPadding {
    pub fn around(units: &[u16], selection: Selection) -> Self {
        let before = if selection.start == 0 {
            0
        } else {
            NEWLINES_BEFORE_BLOCK.saturating_sub(newlines_before(units, selection.start))
        };
        let after = if selection.end >= units.len()
            || newlines_after(units, selection.end) >= NEWLINES_AFTER_BLOCK
        {
            0
        } else {
            NEWLINES_AFTER_BLOCK
        };
        Self { before, after }
    }

    pub fn leading(self) -> Vec<u16> {
        vec![NEWLINE; self.before]
    }

    pub fn trailing(self) -> Vec<u16> {
        vec![NEWLINE; self.after]
    }
}

/// Toggle line or block markup around `selection`.
///
/// # Panics
///
/// Panics if `selection` does not fit inside `text`.
pub fn toggle_multiline(text: &str, selection: Selection, mode: Multiline<'_>) -> ToggleResult {
    let units = encode(text);
    match mode {
        Multiline::Line(prefix) => toggle_line_prefix(&units, selection, &encode(prefix)),
        Multiline::Block { prefix, suffix } => {
            toggle_block(&units, selection, &encode(prefix), &encode(suffix))
        }
    }
}

fn toggle_line_prefix(units: &[u16], selection: Selection, prefix: &[u16]) -> ToggleResult {
    let spans = split_selection(units, selection);
    let selected = spans.selected;

    // A caret right after a freshly inserted marker takes the marker back out.
    if selected.is_empty() && !spans.before.is_empty() {
        let line = line_start(units, selection.start);
        if spans.before[line..].starts_with(prefix) {
            debug!("removing line prefix before caret");
            return ToggleResult::from_units(
                &concat(&[&units[..line], &units[line + prefix.len()..]]),
                selection.start - prefix.len(),
                selection.end - prefix.len(),
            );
        }
    }

    let mut lines: Vec<&[u16]> = selected.split(|&u| u == NEWLINE).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut content = lines.iter().filter(|line| !line.is_empty()).peekable();
    let already_prefixed =
        content.peek().is_some() && content.all(|line| line.starts_with(prefix));
    if already_prefixed {
        debug!(lines = lines.len(), "removing line prefixes");
        let stripped: Vec<&[u16]> = lines
            .iter()
            .map(|&line| line.strip_prefix(prefix).unwrap_or(line))
            .collect();
        let stripped = stripped.join(&NEWLINE);
        return ToggleResult::from_units(
            &concat(&[spans.before, &stripped, spans.after]),
            selection.start,
            selection.start + stripped.len(),
        );
    }

    debug!(lines = lines.len(), "adding line prefixes");
    let formatted = if lines.is_empty() {
        prefix.to_vec()
    } else {
        lines
            .iter()
            .map(|&line| concat(&[prefix, line]))
            .collect::<Vec<_>>()
            .join(&NEWLINE)
    };
    let caret_offset = if selected.is_empty() { prefix.len() } else { 0 };
    insert_block(units, selection, &[], &formatted, &[], caret_offset)
}

fn toggle_block(units: &[u16], selection: Selection, prefix: &[u16], suffix: &[u16]) -> ToggleResult {
    let spans = split_selection(units, selection);
    let selected = spans.selected;

    let selection_is_block = selected.len() >= prefix.len() + suffix.len()
        && selected.starts_with(prefix)
        && selected.ends_with(suffix);
    if selection_is_block {
        debug!("removing block markers inside selection");
        let inner = &selected[prefix.len()..selected.len() - suffix.len()];
        return ToggleResult::from_units(
            &concat(&[spans.before, inner, spans.after]),
            selection.start,
            selection.end - prefix.len() - suffix.len(),
        );
    }

    if spans.before.ends_with(prefix) && spans.after.starts_with(suffix) {
        debug!("removing block markers around selection");
        return ToggleResult::from_units(
            &concat(&[
                &spans.before[..spans.before.len() - prefix.len()],
                selected,
                &spans.after[suffix.len()..],
            ]),
            selection.start - prefix.len(),
            selection.end - prefix.len(),
        );
    }

    debug!("wrapping selection in block markers");
    insert_block(units, selection, prefix, selected, suffix, 0)
}

/// Replace the selection with `prefix + body + suffix`, padded with newlines.
///
/// The new selection starts after the padding and `prefix` (plus
/// `caret_offset`) and ends where the selected text now ends.
fn insert_block(
    units: &[u16],
    selection: Selection,
    prefix: &[u16],
    body: &[u16],
    suffix: &[u16],
    caret_offset: usize,
) -> ToggleResult {
    let spans = split_selection(units, selection);
    let padding = BlockPadding::around(units, selection);
    let leading = padding.leading();
    let out = concat(&[
        spans.before,
        &leading,
        prefix,
        body,
        suffix,
        &padding.trailing(),
        spans.after,
    ]);
    let start = selection.start + leading.len() + prefix.len() + caret_offset;
    let end = selection.start + leading.len() + prefix.len() + body.len();
    ToggleResult::from_units(&out, start, end)
}
