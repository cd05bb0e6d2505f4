//! Presentation data for a formatting toolbar.
//!
//! Nothing here affects how markup is toggled. Keyboard shortcuts depend on
//! the host platform's modifier key, which the host passes in explicitly.

use serde::Serialize;

use crate::markup::Style;

/// Modifier key used in keyboard shortcuts.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Cmd,
}

impl Modifier {
    /// The conventional modifier for the platform this binary was built for.
    pub const fn for_target_os() -> Self {
        if cfg!(target_os = "macos") {
            Self::Cmd
        } else {
            Self::Ctrl
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ctrl => "ctrl",
            Self::Cmd => "cmd",
        }
    }
}

/// Whether a style is shown up front or in the overflow menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarGroup {
    Core,
    Secondary,
}

impl ToolbarGroup {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Secondary => "secondary",
        }
    }
}

/// A keyboard shortcut: the binding string and the hint shown in tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub command: String,
    pub tooltip_hint: String,
}

/// One toolbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarEntry {
    pub style: Style,
    pub label: &'static str,
    pub group: ToolbarGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<Shortcut>,
}

impl Style {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Link => "Link",
            Self::OrderedList => "Ordered list",
            Self::UnorderedList => "Unordered list",
            Self::Heading => "Heading",
            Self::Quote => "Quote",
            Self::Code => "Code",
            Self::CodeBlock => "Code block",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Divider => "Line divider",
        }
    }

    pub const fn group(self) -> ToolbarGroup {
        match self {
            Self::Underline | Self::Strikethrough | Self::Divider => ToolbarGroup::Secondary,
            _ => ToolbarGroup::Core,
        }
    }

    /// Keys pressed together with the modifier, if the style has a shortcut.
    const fn shortcut_keys(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Bold => Some(&["b"]),
            Self::Italic => Some(&["i"]),
            Self::Link => Some(&["k"]),
            Self::Underline => Some(&["u"]),
            Self::Strikethrough => Some(&["shift", "x"]),
            _ => None,
        }
    }

    pub fn shortcut(self, modifier: Modifier) -> Option<Shortcut> {
        let keys = self.shortcut_keys()?;
        let parts: Vec<&str> = std::iter::once(modifier.as_str())
            .chain(keys.iter().copied())
            .collect();
        Some(Shortcut {
            command: parts.join("+"),
            tooltip_hint: parts
                .iter()
                .map(|part| part.to_uppercase())
                .collect::<Vec<_>>()
                .join(" + "),
        })
    }
}

/// Every toolbar entry, core group first, in display order.
pub fn entries(modifier: Modifier) -> Vec<ToolbarEntry> {
    Style::ALL
        .iter()
        .map(|&style| ToolbarEntry {
            style,
            label: style.label(),
            group: style.group(),
            shortcut: style.shortcut(modifier),
        })
        .collect()
}
