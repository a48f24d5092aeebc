//! Render a directory into memory, then print it along with a line count
//!
//! Usage:
//!   cargo run --example list_directory [path]
//!
//! If no path is provided, uses the current directory.

use dirtree::prelude::*;
use std::env;

fn main() {
    // Get path from command line args or use current directory
    let args: Vec<String> = env::args().collect();
    let path = if args.len() > 1 { &args[1] } else { "." };

    let options = Options::default().with_hidden(true);
    let tree = match render_to_string(path, &options) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error rendering directory: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", tree);
    println!();
    println!("{} entries", tree.lines().count().saturating_sub(1));
}
