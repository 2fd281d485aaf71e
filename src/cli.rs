use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relayout")]
#[command(
    version,
    about = "Convert legacy XML layout files into the ReGui JSON layout format",
    long_about = "ReGui Layout Converter\n\nReads an XML layout (a tree of Widget elements with nested Property and Controller elements) and writes an equivalent JSON document in the ReGui schema.\n\nUse --help on the convert subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set default input/output paths; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an XML layout file to ReGui JSON
    Convert {
        #[arg(
            long,
            short,
            help = "Input layout file (defaults to the config's input path, then input.layout)"
        )]
        input: Option<PathBuf>,

        #[arg(
            long,
            short,
            help = "Output JSON file (defaults to the config's output path, then output.json)"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Print the JSON to stdout instead of writing the output file")]
        stdout: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
