use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lss", version, about = "List numbered file series in a directory")]
pub struct Args {
    /// Directory to scan (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
