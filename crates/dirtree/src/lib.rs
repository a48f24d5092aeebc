//! Directory tree printer
//!
//! Prints the hierarchy beneath a directory as an indented tree, directories
//! first and alphabetical within each group, similar to the `tree` utility.
//!
//! # Core Concepts
//!
//! - **Entry**: one file or directory listed inside a parent directory
//! - **Options**: hidden-entry visibility and an optional depth limit
//! - **Renderer**: depth-first walk that writes one line per entry
//!
//! # Example
//!
//! ```no_run
//! use dirtree::prelude::*;
//!
//! let options = Options::default().with_hidden(true).with_max_depth(Some(2));
//! let tree = render_to_string("./src", &options).expect("Failed to render directory");
//! print!("{}", tree);
//! ```

pub mod error;
pub mod options;
pub mod render;
pub mod tree;

pub use error::{Result, TreeError};
pub use options::Options;
pub use render::{
    base_name, print_tree, print_tree_with_options, render, render_to_string, Renderer,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TreeError;
    pub use crate::options::Options;
    pub use crate::render::{print_tree, render, render_to_string, Renderer};
    pub use crate::tree::prelude::*;
}
