//! Realign - text region transformations
//!
//! This crate provides wrap/unwrap, split, and join transformations over
//! regions of a text buffer, with multi-caret fan-out and persisted
//! preferences including quick-wrap button shortcuts.

pub mod buffer;
pub mod commands;
pub mod editor;
pub mod error;
pub mod join;
pub mod line;
pub mod prefs;
pub mod quickwrap;
pub mod region;
pub mod split;
pub mod wrap;

// Re-export commonly used types
pub use buffer::{RopeBuffer, TextBuffer, TextBufferMut};
pub use editor::{Caret, EditorState};
pub use error::TransformError;
pub use prefs::Preferences;
pub use quickwrap::{QuickWrapButton, QuickWrapStore};
pub use region::{Region, RegionKind};
pub use split::Disposal;
pub use wrap::{WrapMode, WrapOptions};
