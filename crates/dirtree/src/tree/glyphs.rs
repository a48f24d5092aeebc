/// Glyphs used to draw branches
///
/// `vert` and `empty` are two cells wide, matching the width of the
/// connector's first two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs<'a> {
    pub branch: &'a str,
    pub branch_last: &'a str,
    pub vert: &'a str,
    pub empty: &'a str,
}

impl TreeGlyphs<'static> {
    pub const DEFAULT: Self = Self {
        branch: "├─ ",
        branch_last: "└─ ",
        vert: "│\u{3000}",
        empty: "\u{3000}\u{3000}",
    };
}

impl Default for TreeGlyphs<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'a> TreeGlyphs<'a> {
    /// Connector placed in front of an entry's name
    pub const fn connector(&self, is_last: bool) -> &'a str {
        if is_last {
            self.branch_last
        } else {
            self.branch
        }
    }

    /// Padding appended to the prefix of an entry's descendants
    pub const fn continuation(&self, is_last: bool) -> &'a str {
        if is_last {
            self.empty
        } else {
            self.vert
        }
    }
}
