//! Editing session for applying toolbar actions.
//!
//! Provides a rope-backed text buffer with a single selection, the way
//! a host text widget would hold it.

mod buffer;

pub use buffer::EditorBuffer;
