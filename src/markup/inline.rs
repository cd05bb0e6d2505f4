//! Symmetric prefix/suffix markup on a single span (`**bold**`, `` `code` ``).

use tracing::debug;

use super::ToggleResult;
use crate::text::Selection;
use crate::text::span::{concat, encode, split_selection};

/// Wrap the selection in `prefix`/`suffix`, or unwrap it if already wrapped.
///
/// Existing markers are looked for first inside the selection, then right
/// around it. The selection keeps covering the same text afterwards.
///
/// # Panics
///
/// Panics if `selection` does not fit inside `text`.
pub fn toggle_inline(text: &str, selection: Selection, prefix: &str, suffix: &str) -> ToggleResult {
    let units = encode(text);
    let prefix = encode(prefix);
    let suffix = encode(suffix);
    let spans = split_selection(&units, selection);
    let selected = spans.selected;

    let selection_is_wrapped = selected.len() >= prefix.len() + suffix.len()
        && selected.starts_with(&prefix)
        && selected.ends_with(&suffix);
    if selection_is_wrapped {
        debug!("removing inline markers inside selection");
        let inner = &selected[prefix.len()..selected.len() - suffix.len()];
        return ToggleResult::from_units(
            &concat(&[spans.before, inner, spans.after]),
            selection.start,
            selection.end - (prefix.len() + suffix.len()),
        );
    }

    if spans.before.ends_with(&prefix) && spans.after.starts_with(&suffix) {
        debug!("removing inline markers around selection");
        let before = &spans.before[..spans.before.len() - prefix.len()];
        return ToggleResult::from_units(
            &concat(&[before, selected, &spans.after[suffix.len()..]]),
            selection.start - prefix.len(),
            selection.end - prefix.len(),
        );
    }

    debug!("wrapping selection in inline markers");
    ToggleResult::from_units(
        &concat(&[spans.before, &prefix, selected, &suffix, spans.after]),
        selection.start + prefix.len(),
        selection.end + prefix.len(),
    )
}
