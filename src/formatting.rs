use std::io::IsTerminal;
use std::process::ExitCode;

use relayout_lib::RelayoutError;

/// Render an error to stderr and return the fatal exit code.
///
/// Exit code 2 is reserved for fatal errors; success is 0.
pub fn render_error(err: RelayoutError) -> ExitCode {
    let payload = err.to_payload();
    let colorize = std::io::stderr().is_terminal();
    eprintln!("{} {}", color("[ERROR]", "31", colorize), payload.message);
    if let Some(remediation) = &payload.remediation {
        eprintln!("Hint: {}", remediation);
    }
    ExitCode::from(2)
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
