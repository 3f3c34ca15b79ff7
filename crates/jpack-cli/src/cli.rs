use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jpack", version, about = "Schema-based JSON value deduplication")]
pub struct Cli {
    /// Codec thresholds as a JSON file
    #[arg(long, global = true, env = "JPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON array of records
    Encode(IoArgs),
    /// Decode an encoded document back to records
    Decode(IoArgs),
    /// Print size and line statistics for encoding the input
    Stats {
        input: Option<PathBuf>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Exit 0 if the input is an encoded document, 2 otherwise
    Check { input: Option<PathBuf> },
    /// Encode then decode and compare with the input
    Verify { input: Option<PathBuf> },
    /// Run the built-in sample and a generated dataset
    Demo {
        #[arg(long, default_value_t = 1000)]
        records: usize,
    },
}

#[derive(Args, Debug)]
pub struct IoArgs {
    /// Input file, stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub pretty: bool,
}
