//! Markdown links, `[description](url)`, toggled in both directions.
//!
//! The link skeleton uses [`URL_PLACEHOLDER`] as its target until the user
//! types a real one. Shape detection is deliberately narrow: anything that
//! does not match falls through to plain wrapping.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::ToggleResult;
use crate::text::Selection;
use crate::text::span::{
    NEWLINE, Spans, concat, encode, last_index_of, next_index_of, split_selection, unit,
};

/// Target inserted into a link whose URL has not been typed yet.
pub const URL_PLACEHOLDER: &str = "url";

/// A whole link whose description is word characters and spaces, pointing
/// either at the placeholder or at a plain `http(s)://` URL.
static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([0-9A-Za-z_\s]*)\]\((url|https?://[0-9A-Za-z_./?=#]+)\)$")
        .expect("link pattern is valid")
});

/// Whether `text` starts with an `http://` or `https://` scheme.
pub fn looks_like_url(text: &str) -> bool {
    text.starts_with("https://") || text.starts_with("http://")
}

/// Whether `text` is exactly one markdown link in the supported shape.
pub fn is_markdown_link(text: &str) -> bool {
    MARKDOWN_LINK.is_match(text)
}

/// Toggle a link around `selection`.
///
/// | selection | result |
/// |---|---|
/// | caret | `[](url)` skeleton, caret inside `[]`; inside an empty `[]` the link is collapsed |
/// | URL or placeholder | `[](<url>)`, caret inside `[]`; inside a link's `()` the link is collapsed |
/// | a whole link | the description, or the URL if there is none |
/// | anything else | `[<text>](url)` with the placeholder selected |
///
/// # Panics
///
/// Panics if `selection` does not fit inside `text`.
pub fn toggle_link(text: &str, selection: Selection) -> ToggleResult {
    let units = encode(text);
    let spans = split_selection(&units, selection);

    if spans.selected.is_empty() {
        return toggle_at_caret(&units, spans, selection);
    }

    let selected = String::from_utf16_lossy(spans.selected);
    if looks_like_url(&selected) || selected == URL_PLACEHOLDER {
        return toggle_url_selection(&units, spans, selection);
    }

    if is_markdown_link(&selected) {
        return unlink_selection(spans, selection);
    }

    debug!("linking selected text to placeholder");
    let placeholder = encode(URL_PLACEHOLDER);
    ToggleResult::from_units(
        &concat(&[
            spans.before,
            &encode("["),
            spans.selected,
            &encode("]("),
            &placeholder,
            &encode(")"),
            spans.after,
        ]),
        selection.end + 3,
        selection.end + 3 + placeholder.len(),
    )
}

fn toggle_at_caret(units: &[u16], spans: Spans<'_>, selection: Selection) -> ToggleResult {
    let placeholder = encode(URL_PLACEHOLDER);

    // Caret inside the empty description of a link: `[|](...)`.
    let inside_empty_description =
        spans.before.last() == Some(&unit('[')) && spans.after.starts_with(&encode("]("));
    if inside_empty_description {
        if let Some(close) =
            next_index_of(units, selection.start, unit(')'), &[unit(' '), NEWLINE])
        {
            let url = &units[selection.end + 2..close];
            let keep: &[u16] = if url == placeholder.as_slice() { &[] } else { url };
            debug!(kept_url = !keep.is_empty(), "collapsing link with empty description");
            return ToggleResult::from_units(
                &concat(&[&units[..selection.start - 1], keep, &units[close + 1..]]),
                selection.start - 1,
                selection.end - 1,
            );
        }
    }

    debug!("inserting link skeleton");
    ToggleResult::from_units(
        &concat(&[spans.before, &encode("[]("), &placeholder, &encode(")"), spans.after]),
        selection.start + 1,
        selection.start + 1,
    )
}

fn toggle_url_selection(units: &[u16], spans: Spans<'_>, selection: Selection) -> ToggleResult {
    // Selection is the target of a link: `[...](|url|)`.
    let inside_link_target =
        spans.before.ends_with(&encode("](")) && spans.after.starts_with(&encode(")"));
    if inside_link_target {
        if let Some(open) = last_index_of(units, selection.start, unit('[')) {
            let description = &spans.before[open + 1..spans.before.len() - 2];
            let replacement: &[u16] = if !description.is_empty() {
                description
            } else if spans.selected == encode(URL_PLACEHOLDER).as_slice() {
                &[]
            } else {
                spans.selected
            };
            debug!("collapsing link from its target");
            return ToggleResult::from_units(
                &concat(&[&spans.before[..open], replacement, &spans.after[1..]]),
                open,
                open + replacement.len(),
            );
        }
    }

    debug!("linking selected url");
    ToggleResult::from_units(
        &concat(&[spans.before, &encode("[]("), spans.selected, &encode(")"), spans.after]),
        selection.start + 1,
        selection.start + 1,
    )
}

fn unlink_selection(spans: Spans<'_>, selection: Selection) -> ToggleResult {
    let selected = spans.selected;
    // The pattern guarantees a `]` ahead of the `(`.
    let description_end = next_index_of(selected, 0, unit(']'), &[]).unwrap_or(selected.len());
    let description = &selected[1..description_end];

    let replacement: &[u16] = if description.is_empty() {
        let url = &selected[(description_end + 2).min(selected.len() - 1)..selected.len() - 1];
        if url == encode(URL_PLACEHOLDER).as_slice() {
            &[]
        } else {
            url
        }
    } else {
        description
    };

    debug!("removing link markup from selection");
    ToggleResult::from_units(
        &concat(&[spans.before, replacement, spans.after]),
        selection.start,
        selection.start + replacement.len(),
    )
}
