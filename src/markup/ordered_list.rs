//! Numbered lists (`1. `, `2. `, ...).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::ToggleResult;
use super::multiline::BlockPadding;
use crate::text::Selection;
use crate::text::span::{NEWLINE, concat, encode, line_start, split_selection, unit};

const FIRST_ITEM: &str = "1. ";

/// A line that already starts with a list number.
static ORDERED_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").expect("list item pattern is valid"));

/// Whether `line` starts with `N.` followed by whitespace.
pub fn is_ordered_list_item(line: &str) -> bool {
    ORDERED_LIST_ITEM.is_match(line)
}

/// Number the selected lines, or strip their numbers if they all have one.
///
/// # Panics
///
/// Panics if `selection` does not fit inside `text`.
pub fn toggle_ordered_list(text: &str, selection: Selection) -> ToggleResult {
    let units = encode(text);
    let spans = split_selection(&units, selection);
    let padding = BlockPadding::around(&units, selection);
    let first_item = encode(FIRST_ITEM);

    if spans.selected.is_empty() {
        if !spans.before.is_empty() {
            let line = line_start(&units, selection.start);
            if spans.before[line..].starts_with(&first_item) {
                debug!("removing empty list item");
                return ToggleResult::from_units(
                    &concat(&[&units[..line], &units[line + first_item.len()..]]),
                    selection.start - first_item.len(),
                    selection.end - first_item.len(),
                );
            }
        }

        debug!("inserting empty list item");
        let leading = padding.leading();
        return ToggleResult::from_units(
            &concat(&[
                spans.before,
                &leading,
                &first_item,
                &padding.trailing(),
                spans.after,
            ]),
            selection.start + leading.len() + first_item.len(),
            selection.end + leading.len() + first_item.len(),
        );
    }

    let lines: Vec<&[u16]> = spans.selected.split(|&u| u == NEWLINE).collect();
    let mut items = lines.iter().filter(|line| !line.is_empty()).peekable();
    let already_numbered = items.peek().is_some()
        && items.all(|line| is_ordered_list_item(&String::from_utf16_lossy(line)));

    if already_numbered {
        debug!(lines = lines.len(), "removing list numbers");
        let stripped: Vec<&[u16]> = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|&line| strip_number(line))
            .collect();
        let stripped = stripped.join(&NEWLINE);
        return ToggleResult::from_units(
            &concat(&[spans.before, &stripped, spans.after]),
            selection.start,
            selection.start + stripped.len(),
        );
    }

    debug!(lines = lines.len(), "numbering lines");
    let numbered = lines
        .iter()
        .enumerate()
        .map(|(idx, &line)| concat(&[&encode(&format!("{}. ", idx + 1)), line]))
        .collect::<Vec<_>>()
        .join(&NEWLINE);
    let leading = padding.leading();
    ToggleResult::from_units(
        &concat(&[
            spans.before,
            &leading,
            &numbered,
            &padding.trailing(),
            spans.after,
        ]),
        selection.start + leading.len(),
        selection.start + leading.len() + numbered.len(),
    )
}

/// Drop everything up to and including the unit after the first `.`.
fn strip_number(line: &[u16]) -> &[u16] {
    line.iter()
        .position(|&u| u == unit('.'))
        .and_then(|dot| line.get(dot + 2..))
        .unwrap_or(line)
}
