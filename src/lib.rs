// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. toolbar::ToolbarEntry)
    clippy::module_name_repetitions
)]

//! # togglemark
//!
//! Toggleable markdown markup for plain-text editors.
//!
//! Given a buffer, a selection and a style, togglemark computes the new
//! buffer and selection: the style is applied if it is absent and removed
//! if the selection (or the text right around it) already carries it.
//!
//! - Inline pairs: bold, italic, code, underline, strikethrough
//! - Line prefixes: quote, unordered list
//! - Blocks: code block, divider
//! - Links, headings and ordered lists with their own rules
//!
//! ```
//! use togglemark::markup::Style;
//! use togglemark::text::Selection;
//!
//! let on = Style::Bold.toggle("hello world", Selection::new(0, 5));
//! assert_eq!(on.text, "**hello** world");
//! let off = Style::Bold.toggle(&on.text, on.selection);
//! assert_eq!(off.text, "hello world");
//! ```
//!
//! ## Modules
//!
//! - [`text`]: selections and UTF-16 span utilities
//! - [`markup`]: the toggle engines and the style dispatch table
//! - [`toolbar`]: labels, groups and keyboard shortcuts
//! - [`editor`]: a rope-backed editing session
//! - [`config`]: saved command-line defaults

pub mod config;
pub mod editor;
pub mod markup;
pub mod text;
pub mod toolbar;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::EditorBuffer;
    pub use crate::markup::{Style, ToggleResult, toggle};
    pub use crate::text::{Selection, SelectionError};
    pub use crate::toolbar::Modifier;
}
