use std::path::PathBuf;
use std::process::ExitCode;

use relayout_lib::{convert_layout_file, to_pretty_json, write_document};

use crate::formatting::render_error;
use crate::settings::{format_effective_settings, load_config, resolve_convert_settings};

/// Run the convert command.
pub fn run_convert(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    to_stdout: bool,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };
    let settings = resolve_convert_settings(input, output, to_stdout, &config);

    if verbose {
        eprintln!(
            "{}",
            format_effective_settings(&settings, config_path.as_deref())
        );
        eprintln!("Converting {}\u{2026}", settings.input.display());
    }

    let document = match convert_layout_file(&settings.input) {
        Ok(doc) => doc,
        Err(err) => return render_error(err),
    };

    if verbose {
        eprintln!("Converted {} top-level widget(s)", document.data.len());
    }

    if settings.to_stdout {
        let json = match to_pretty_json(&document) {
            Ok(json) => json,
            Err(err) => return render_error(err),
        };
        println!("{json}");
    } else {
        if let Err(err) = write_document(&document, &settings.output) {
            return render_error(err);
        }
        if verbose {
            eprintln!("Wrote {}", settings.output.display());
        }
    }

    ExitCode::SUCCESS
}
