//! Character searches and buffer splitting on UTF-16 code units.
//!
//! All functions are total: searches report a miss with `None` rather than
//! failing, and out-of-range starting points are treated as misses.

use super::Selection;

pub const NEWLINE: u16 = b'\n' as u16;

/// Convert an ASCII marker character to a code unit.
pub const fn unit(ch: char) -> u16 {
    ch as u16
}

/// Encode a string as UTF-16 code units.
pub fn encode(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Concatenate several unit slices into one buffer.
pub fn concat(parts: &[&[u16]]) -> Vec<u16> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Highest index `<= from` holding `target`.
///
/// A `from` past the end of `content` scans from the last unit.
pub fn last_index_of(content: &[u16], from: usize, target: u16) -> Option<usize> {
    last_index_of_until(content, from, target, &[])
}

/// Like [`last_index_of`], but gives up as soon as one of `breaks` is seen.
pub fn last_index_of_until(
    content: &[u16],
    from: usize,
    target: u16,
    breaks: &[u16],
) -> Option<usize> {
    let last = content.len().checked_sub(1)?;
    for idx in (0..=from.min(last)).rev() {
        let current = content[idx];
        if current == target {
            return Some(idx);
        }
        if breaks.contains(&current) {
            return None;
        }
    }
    None
}

/// Lowest index `>= from` holding `target`, unless one of `breaks` comes first.
pub fn next_index_of(content: &[u16], from: usize, target: u16, breaks: &[u16]) -> Option<usize> {
    for (idx, &current) in content.iter().enumerate().skip(from) {
        if current == target {
            return Some(idx);
        }
        if breaks.contains(&current) {
            return None;
        }
    }
    None
}

/// Number of consecutive newlines ending right before `start`.
pub fn newlines_before(content: &[u16], start: usize) -> usize {
    content[..start.min(content.len())]
        .iter()
        .rev()
        .take_while(|&&u| u == NEWLINE)
        .count()
}

/// Number of consecutive newlines starting at `end`.
pub fn newlines_after(content: &[u16], end: usize) -> usize {
    content
        .get(end..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&u| u == NEWLINE)
        .count()
}

/// Offset of the first unit of the line containing `offset`.
pub fn line_start(content: &[u16], offset: usize) -> usize {
    if offset == 0 {
        return 0;
    }
    last_index_of(content, offset - 1, NEWLINE).map_or(0, |idx| idx + 1)
}

/// The buffer cut into the text before, inside and after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spans<'a> {
    pub before: &'a [u16],
    pub selected: &'a [u16],
    pub after: &'a [u16],
}

/// Split `content` around `selection`.
///
/// # Panics
///
/// Panics if the selection does not fit inside `content`; hosts must
/// hand over offsets that belong to the buffer they pass.
pub fn split_selection(content: &[u16], selection: Selection) -> Spans<'_> {
    assert!(
        selection.start <= selection.end && selection.end <= content.len(),
        "selection {}..{} outside buffer of {} UTF-16 units",
        selection.start,
        selection.end,
        content.len()
    );
    Spans {
        before: &content[..selection.start],
        selected: &content[selection.start..selection.end],
        after: &content[selection.end..],
    }
}
