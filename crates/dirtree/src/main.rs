use std::path::PathBuf;

use clap::Parser;
use dirtree::{print_tree_with_options, Options};

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print the structure of a directory as a tree", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to display
    #[arg(long, value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Show hidden files and directories
    #[arg(long)]
    hidden: bool,

    /// Maximum traversal depth (-1 for unlimited)
    #[arg(long, value_name = "DEPTH", default_value_t = -1, allow_negative_numbers = true)]
    depth: i64,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Options::new()
            .with_hidden(cli.hidden)
            .with_max_depth(Options::depth_limit(cli.depth))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    let options = Options::from(&cli);
    log::debug!("Parsed options: {:?}", options);

    print_tree_with_options(&cli.path, &options)?;
    Ok(())
}
