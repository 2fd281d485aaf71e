mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::run_convert;

fn main() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Convert {
            input,
            output,
            stdout,
        } => run_convert(args.config, args.verbose, input, output, stdout),
    }
}
