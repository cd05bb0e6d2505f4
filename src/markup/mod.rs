//! Toggleable markdown markup.
//!
//! Every style is a pure function of a buffer and a selection: it either
//! applies its markup around the selection or, when the selection (or the
//! text right around it) is already marked up, removes it again.
//!
//! - [`inline`]: symmetric prefix/suffix pairs such as `**bold**`
//! - [`multiline`]: per-line prefixes (`> `) and delimited blocks (fences)
//! - [`link`]: `[description](url)` in both directions
//! - [`heading`] and [`ordered_list`]: styles whose markers depend on what
//!   is already on the line
//!
//! [`Style::markup`] is the dispatch table tying each style to its engine.

pub mod heading;
pub mod inline;
pub mod link;
pub mod multiline;
pub mod ordered_list;

use serde::Serialize;

use crate::text::Selection;

pub use multiline::Multiline;

/// A markup style offered by the toolbar.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    Bold,
    Italic,
    Link,
    OrderedList,
    UnorderedList,
    Heading,
    Quote,
    Code,
    CodeBlock,
    Underline,
    Strikethrough,
    Divider,
}

impl Style {
    /// All styles in toolbar order.
    pub const ALL: [Self; 12] = [
        Self::Bold,
        Self::Italic,
        Self::Link,
        Self::OrderedList,
        Self::UnorderedList,
        Self::Heading,
        Self::Quote,
        Self::Code,
        Self::CodeBlock,
        Self::Underline,
        Self::Strikethrough,
        Self::Divider,
    ];

    /// Stable identifier, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Link => "link",
            Self::OrderedList => "orderedList",
            Self::UnorderedList => "unorderedList",
            Self::Heading => "heading",
            Self::Quote => "quote",
            Self::Code => "code",
            Self::CodeBlock => "codeBlock",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Divider => "divider",
        }
    }

    /// How this style is toggled.
    pub const fn markup(self) -> Markup {
        match self {
            Self::Bold => Markup::Inline {
                prefix: "**",
                suffix: "**",
            },
            Self::Italic => Markup::Inline {
                prefix: "_",
                suffix: "_",
            },
            Self::Code => Markup::Inline {
                prefix: "`",
                suffix: "`",
            },
            Self::Underline => Markup::Inline {
                prefix: "<u>",
                suffix: "</u>",
            },
            Self::Strikethrough => Markup::Inline {
                prefix: "~~",
                suffix: "~~",
            },
            Self::UnorderedList => Markup::Multiline(Multiline::Line("- ")),
            Self::Quote => Markup::Multiline(Multiline::Line("> ")),
            Self::CodeBlock => Markup::Multiline(Multiline::Block {
                prefix: "```\n",
                suffix: "\n```",
            }),
            Self::Divider => Markup::Multiline(Multiline::Block {
                prefix: "---\n",
                suffix: "",
            }),
            Self::Link => Markup::Link,
            Self::Heading => Markup::Heading,
            Self::OrderedList => Markup::OrderedList,
        }
    }

    /// Toggle this style on `text` around `selection`.
    ///
    /// # Panics
    ///
    /// Panics if `selection` does not fit inside `text` (in UTF-16 units).
    pub fn toggle(self, text: &str, selection: Selection) -> ToggleResult {
        toggle(self, text, selection)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes how one style is toggled.
///
/// The line/block split lives in [`Multiline`], so a descriptor can never
/// carry both a line prefix and a block pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Inline {
        prefix: &'static str,
        suffix: &'static str,
    },
    Multiline(Multiline<'static>),
    Link,
    Heading,
    OrderedList,
}

/// The edited buffer and where the selection ends up.
///
/// `selection` always fits inside `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleResult {
    pub text: String,
    pub selection: Selection,
}

impl ToggleResult {
    pub(crate) fn from_units(units: &[u16], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= units.len());
        Self {
            text: String::from_utf16_lossy(units),
            selection: Selection::new(start, end),
        }
    }
}

/// Toggle `style` on `text` around `selection`.
///
/// # Panics
///
/// Panics if `selection` does not fit inside `text` (in UTF-16 units).
pub fn toggle(style: Style, text: &str, selection: Selection) -> ToggleResult {
    tracing::trace!(
        style = style.name(),
        start = selection.start,
        end = selection.end,
        "toggling markup"
    );
    match style.markup() {
        Markup::Inline { prefix, suffix } => inline::toggle_inline(text, selection, prefix, suffix),
        Markup::Multiline(mode) => multiline::toggle_multiline(text, selection, mode),
        Markup::Link => link::toggle_link(text, selection),
        Markup::Heading => heading::toggle_heading(text, selection),
        Markup::OrderedList => ordered_list::toggle_ordered_list(text, selection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16_len(s: &str) -> usize {
        s.encode_utf16().count()
    }

    #[test]
    fn test_bold_round_trip_scenario() {
        let on = Style::Bold.toggle("hello world", Selection::new(0, 5));
        assert_eq!(on.text, "**hello** world");
        assert_eq!(on.selection, Selection::new(2, 7));

        let off = Style::Bold.toggle(&on.text, on.selection);
        assert_eq!(off.text, "hello world");
        assert_eq!(off.selection, Selection::new(0, 5));
    }

    #[test]
    fn test_ordered_list_on_empty_buffer_scenario() {
        let result = Style::OrderedList.toggle("", Selection::caret(0));
        assert_eq!(result.text, "1. ");
        assert_eq!(result.selection, Selection::caret(3));
    }

    #[test]
    fn test_link_on_url_scenario() {
        let result = Style::Link.toggle("https://example.com", Selection::new(0, 19));
        assert_eq!(result.text, "[](https://example.com)");
        assert_eq!(result.selection, Selection::caret(1));
    }

    #[test]
    fn test_heading_cycles_back_after_four_toggles() {
        let mut text = "hello".to_string();
        let mut selection = Selection::new(0, 5);
        let mut seen = Vec::new();
        for _ in 0..4 {
            let result = Style::Heading.toggle(&text, selection);
            text = result.text;
            selection = result.selection;
            seen.push(text.clone());
        }
        assert_eq!(seen, ["## hello", "### hello", "#### hello", "hello"]);
        assert_eq!(selection, Selection::new(0, 5));
    }

    #[test]
    fn test_code_block_at_buffer_start_scenario() {
        let result = Style::CodeBlock.toggle("x = 1", Selection::new(0, 5));
        assert_eq!(result.text, "```\nx = 1\n```");
        assert_eq!(result.selection, Selection::new(4, 9));
    }

    #[test]
    fn test_every_style_has_a_descriptor() {
        for style in Style::ALL {
            let _ = style.markup();
            assert!(!style.name().is_empty());
        }
    }

    #[test]
    fn test_markup_table_entries() {
        assert_eq!(
            Style::Underline.markup(),
            Markup::Inline {
                prefix: "<u>",
                suffix: "</u>"
            }
        );
        assert_eq!(
            Style::Quote.markup(),
            Markup::Multiline(Multiline::Line("> "))
        );
        assert_eq!(
            Style::Divider.markup(),
            Markup::Multiline(Multiline::Block {
                prefix: "---\n",
                suffix: ""
            })
        );
    }

    #[test]
    fn test_style_serializes_as_camel_case() {
        let json = serde_json::to_string(&Style::CodeBlock).unwrap();
        assert_eq!(json, "\"codeBlock\"");
        assert_eq!(Style::OrderedList.to_string(), "orderedList");
    }

    #[test]
    fn test_toggle_result_serializes_selection() {
        let result = Style::Code.toggle("x", Selection::new(0, 1));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "`x`");
        assert_eq!(json["selection"]["start"], 1);
        assert_eq!(json["selection"]["end"], 2);
    }

    #[test]
    fn test_offsets_are_utf16_units() {
        // "😀 " is three UTF-16 units.
        let result = Style::Bold.toggle("😀 hi", Selection::new(3, 5));
        assert_eq!(result.text, "😀 **hi**");
        assert_eq!(result.selection, Selection::new(5, 7));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn buffer_and_selection() -> impl Strategy<Value = (String, Selection)> {
            proptest::collection::vec(
                prop_oneof![
                    Just('a'),
                    Just('b'),
                    Just(' '),
                    Just('\n'),
                    Just('#'),
                    Just('*'),
                    Just('_'),
                    Just('['),
                    Just(']'),
                    Just('('),
                    Just(')'),
                    Just('>'),
                    Just('-'),
                    Just('`'),
                    Just('1'),
                    Just('.'),
                    Just('é'),
                ],
                0..40,
            )
            .prop_flat_map(|chars| {
                let text: String = chars.into_iter().collect();
                let len = text.encode_utf16().count();
                (Just(text), 0..=len, 0..=len)
            })
            .prop_map(|(text, a, b)| (text, Selection::new(a.min(b), a.max(b))))
        }

        fn any_style() -> impl Strategy<Value = Style> {
            proptest::sample::select(Style::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn selection_stays_inside_new_buffer(
                (text, selection) in buffer_and_selection(),
                style in any_style(),
            ) {
                let result = style.toggle(&text, selection);
                prop_assert!(result.selection.start <= result.selection.end);
                prop_assert!(result.selection.end <= utf16_len(&result.text));
            }

            #[test]
            fn inline_wrap_is_undone_by_second_toggle(
                (text, selection) in buffer_and_selection(),
                style in proptest::sample::select(vec![
                    Style::Bold,
                    Style::Italic,
                    Style::Code,
                    Style::Underline,
                    Style::Strikethrough,
                ]),
            ) {
                let on = style.toggle(&text, selection);
                prop_assume!(utf16_len(&on.text) > utf16_len(&text));
                let off = style.toggle(&on.text, on.selection);
                prop_assert_eq!(off.text, text);
                prop_assert_eq!(off.selection, selection);
            }

            #[test]
            fn inline_wrap_leaves_surroundings_alone(
                (text, selection) in buffer_and_selection(),
            ) {
                let result = Style::Strikethrough.toggle(&text, selection);
                let units: Vec<u16> = text.encode_utf16().collect();
                let out: Vec<u16> = result.text.encode_utf16().collect();
                if out.len() > units.len() {
                    prop_assert!(out.starts_with(&units[..selection.start]));
                    prop_assert!(out.ends_with(&units[selection.end..]));
                }
            }
        }
    }
}
