//! Filesystem entries and the per-directory listing used by the renderer

pub mod filesystem;
mod glyphs;
mod node;

pub use filesystem::{list_dir, sort_entries};
pub use glyphs::TreeGlyphs;
pub use node::{is_hidden, Entry, EntryKind};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{list_dir, Entry, EntryKind, TreeGlyphs};
}
