use clap::Parser;
use std::path::PathBuf;

/// program to filter html into a minimal safe subset of tags and attributes.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Input HTML file. Standard input is read when not set.
    pub input: Option<PathBuf>,
    /// Keep whitespace and newlines in HTML.
    #[clap(short, long)]
    pub keep_whitespace: bool,
    /// Output file. Standard output is used when not set.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Print processing details on standard error.
    #[clap(short, long)]
    pub verbose: bool,
}
