pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// imgascii - Convert images into ASCII art
///
/// With no subcommand, converts picture.jpg into output.txt.
#[derive(Parser, Debug)]
#[command(name = "imgascii")]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
