//! Traversal options

/// Options for one rendering pass
///
/// Built once at startup and passed by reference through the whole walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Include entries whose name starts with a dot
    pub show_hidden: bool,
    /// Deepest level to list, counting the root's children as level 0.
    /// `None` walks the full hierarchy.
    pub max_depth: Option<usize>,
}

impl Options {
    /// Create options with hidden entries suppressed and no depth limit
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Convert a command-line depth where any negative value means unbounded
    pub fn depth_limit(depth: i64) -> Option<usize> {
        usize::try_from(depth).ok()
    }

    /// Returns true if entries at `depth` lie past the limit
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(!options.show_hidden);
        assert_eq!(options.max_depth, None);
        assert_eq!(options, Options::new());
    }

    #[test]
    fn test_depth_limit() {
        assert_eq!(Options::depth_limit(-1), None);
        assert_eq!(Options::depth_limit(-7), None);
        assert_eq!(Options::depth_limit(0), Some(0));
        assert_eq!(Options::depth_limit(3), Some(3));
    }

    #[test]
    fn test_exceeds_depth() {
        let unbounded = Options::new();
        assert!(!unbounded.exceeds_depth(0));
        assert!(!unbounded.exceeds_depth(10_000));

        let limited = Options::new().with_max_depth(Some(1));
        assert!(!limited.exceeds_depth(0));
        assert!(!limited.exceeds_depth(1));
        assert!(limited.exceeds_depth(2));
    }
}
