//! Directory listing: read, filter and sort one level of the filesystem

use crate::error::{Result, TreeError};
use crate::options::Options;
use crate::tree::{Entry, EntryKind};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

/// List the immediate children of `path`, ready for rendering
///
/// The listing is fully materialized: hidden entries are dropped (unless
/// `options.show_hidden`) and the rest sorted with [`sort_entries`] before
/// anything is returned. Any failure while reading, including a failure on a
/// single entry, is a [`TreeError::ReadError`].
pub fn list_dir(path: &Path, options: &Options) -> Result<Vec<Entry>> {
    let read_error = |source: io::Error| TreeError::ReadError {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    let mut total = 0usize;

    for dir_entry in fs::read_dir(path).map_err(read_error)? {
        let dir_entry = dir_entry.map_err(read_error)?;
        total += 1;

        let name = dir_entry.file_name();
        let entry_kind = if dir_entry.file_type().map_err(read_error)?.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let entry = Entry::new(name, entry_kind);

        if !options.show_hidden && entry.is_hidden() {
            trace!("Skipping hidden entry: {}", entry.display_name());
            continue;
        }
        entries.push(entry);
    }

    sort_entries(&mut entries);

    debug!(
        "Listed {}: {} entries, {} shown",
        path.display(),
        total,
        entries.len()
    );
    Ok(entries)
}

/// Sort entries: directories first, then files, by name within each group
///
/// Names compare as raw `OsStr`, which is byte order on Unix.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.kind, b.kind) {
        (EntryKind::Directory, EntryKind::File) => Ordering::Less,
        (EntryKind::File, EntryKind::Directory) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}
