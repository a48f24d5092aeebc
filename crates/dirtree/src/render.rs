//! Tree rendering
//!
//! Walks a directory depth-first in pre-order and writes one line per entry:
//!
//! ```text
//! proj
//! ├─ sub
//! │　└─ c.txt
//! ├─ a.txt
//! └─ b.txt
//! ```

use crate::error::{Result, TreeError};
use crate::options::Options;
use crate::tree::{list_dir, TreeGlyphs};
use log::{info, trace};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{self, Path};

/// Renders directory trees to any writer
pub struct Renderer<'a> {
    options: &'a Options,
    glyphs: TreeGlyphs<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            glyphs: TreeGlyphs::DEFAULT,
        }
    }

    /// Render the tree rooted at `root`
    ///
    /// Writes the root's base name, then every visible descendant.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if `root` cannot be stat'ed,
    /// [`TreeError::NotADirectory`] if it is not a directory, and any error
    /// from [`Renderer::walk`].
    pub fn render<W: Write>(&self, out: &mut W, root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|source| TreeError::NotFound {
            path: root.to_path_buf(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        info!("Rendering tree for: {}", root.display());
        writeln!(out, "{}", base_name(root))?;
        self.walk(out, root, "", 0)
    }

    /// Write the children of `path`, recursing into sub-directories
    ///
    /// `depth` is the level of `path`'s children (the root's children are at
    /// depth 0). Nothing is listed once `depth` passes the configured limit.
    /// The first failure aborts the walk, including any remaining siblings.
    pub fn walk<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        prefix: &str,
        depth: usize,
    ) -> Result<()> {
        if self.options.exceeds_depth(depth) {
            trace!("Depth limit reached at {}", path.display());
            return Ok(());
        }

        let entries = list_dir(path, self.options)?;
        let last = entries.len().saturating_sub(1);

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == last;
            let connector = self.glyphs.connector(is_last);
            writeln!(out, "{}{}{}", prefix, connector, entry.display_name())?;

            if entry.is_directory() {
                let child_prefix = format!("{}{}", prefix, self.glyphs.continuation(is_last));
                self.walk(out, &path.join(&entry.name), &child_prefix, depth + 1)?;
            }
        }

        Ok(())
    }
}

/// Render `root` into `out`
pub fn render<W: Write>(out: &mut W, root: impl AsRef<Path>, options: &Options) -> Result<()> {
    Renderer::new(options).render(out, root.as_ref())
}

/// Render `root` and return the tree as a string
pub fn render_to_string(root: impl AsRef<Path>, options: &Options) -> Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, root, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Print the tree for `root` to stdout using default options
pub fn print_tree(root: impl AsRef<Path>) -> Result<()> {
    print_tree_with_options(root, &Options::default())
}

/// Print the tree for `root` to stdout
///
/// Output is flushed even when rendering fails part way, so the lines
/// produced before the error remain visible.
pub fn print_tree_with_options(root: impl AsRef<Path>, options: &Options) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_flushed(&mut out, root, options)
}

/// Render into `out`, then flush it whether or not rendering succeeded
///
/// A rendering error takes precedence over a failed flush.
fn render_flushed<W: Write>(
    out: &mut W,
    root: impl AsRef<Path>,
    options: &Options,
) -> Result<()> {
    let result = render(&mut *out, root, options);
    let flushed = out.flush();
    result.and(flushed.map_err(TreeError::from))
}

/// Last element of `path`, ignoring trailing separators
///
/// An empty path gives `.` and a path of only separators gives the separator.
pub fn base_name(path: &Path) -> String {
    let text = path.to_string_lossy();
    if text.is_empty() {
        return ".".to_string();
    }

    let trimmed = text.trim_end_matches(path::is_separator);
    if trimmed.is_empty() {
        return path::MAIN_SEPARATOR.to_string();
    }

    match trimmed.rfind(path::is_separator) {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("proj")), "proj");
        assert_eq!(base_name(Path::new("proj/")), "proj");
        assert_eq!(base_name(Path::new("a/b/c")), "c");
        assert_eq!(base_name(Path::new(".")), ".");
        assert_eq!(base_name(Path::new("a/..")), "..");
        assert_eq!(base_name(Path::new("")), ".");
    }

    #[cfg(unix)]
    #[test]
    fn test_base_name_of_root() {
        assert_eq!(base_name(Path::new("/")), "/");
        assert_eq!(base_name(Path::new("//")), "/");
    }

    #[test]
    fn test_empty_directory_prints_only_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("empty");
        fs::create_dir(&root).unwrap();

        let output = render_to_string(&root, &Options::default()).unwrap();
        assert_eq!(output, "empty\n");
    }

    #[test]
    fn test_last_directory_uses_blank_continuation() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("root");
        fs::create_dir_all(root.join("only/inner")).unwrap();
        fs::write(root.join("only/inner/leaf.txt"), "").unwrap();

        let output = render_to_string(&root, &Options::default()).unwrap();
        assert_eq!(
            output,
            "root\n└─ only\n　　└─ inner\n　　　　└─ leaf.txt\n"
        );
    }

    #[test]
    fn test_depth_zero_lists_only_children() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("root");
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("top.txt"), "").unwrap();

        let options = Options::default().with_max_depth(Some(0));
        let output = render_to_string(&root, &options).unwrap();
        assert_eq!(output, "root\n├─ sub\n└─ top.txt\n");
    }

    #[test]
    fn test_write_failure_is_output_error() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let temp = TempDir::new().unwrap();
        let err = render(&mut FailingWriter, temp.path(), &Options::default()).unwrap_err();
        assert!(matches!(err, TreeError::Output { .. }));
    }

    #[test]
    fn test_render_error_wins_over_flush_error() {
        struct UnflushableWriter(Vec<u8>);

        impl Write for UnflushableWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.write(buf)
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let temp = TempDir::new().unwrap();
        let mut out = UnflushableWriter(Vec::new());

        let err = render_flushed(&mut out, temp.path().join("missing"), &Options::default())
            .unwrap_err();
        assert!(matches!(err, TreeError::NotFound { .. }));

        let err = render_flushed(&mut out, temp.path(), &Options::default()).unwrap_err();
        assert!(matches!(err, TreeError::Output { .. }));
    }
}
