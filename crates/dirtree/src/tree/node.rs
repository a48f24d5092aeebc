//! Directory entry types

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// The kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A directory - rendered before files and descended into
    Directory,
    /// Anything that is not a directory (regular files, symlinks, sockets, ...)
    File,
}

impl EntryKind {
    /// Returns true if this is a directory
    pub const fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// A single child of a listed directory
///
/// Entries carry no identity beyond their name; two entries with the same
/// name and kind are equal. The name is kept exactly as the filesystem
/// returned it, so it can be joined back onto the parent path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's name (not full path)
    pub name: OsString,
    /// Whether this is a directory or a file
    pub kind: EntryKind,
}

impl Entry {
    /// Create a new entry
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a new directory entry
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    /// Create a new file entry
    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, EntryKind::File)
    }

    /// Returns true if this is a directory
    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Returns true if the name starts with a dot
    pub fn is_hidden(&self) -> bool {
        is_hidden(&self.name)
    }

    /// Name for output; invalid UTF-8 is replaced with U+FFFD
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Dot-prefixed names are hidden
pub fn is_hidden(name: impl AsRef<OsStr>) -> bool {
    name.as_ref().as_encoded_bytes().starts_with(b".")
}
