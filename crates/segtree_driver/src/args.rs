use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File holding the array and the command stream.
    ///
    /// If unset, reads standard input.
    pub input: Option<PathBuf>,

    /// Print the tree (`value/lazy` per node) to stderr after every command
    #[arg(short, long)]
    pub dump: bool,
}
