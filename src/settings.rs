use std::path::{Path, PathBuf};

use relayout_lib::{Config, RelayoutError};

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConvertSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub to_stdout: bool,
}

/// Merge CLI arguments with the config file, preferring CLI when flags
/// are present.
pub fn resolve_convert_settings(
    cli_input: Option<PathBuf>,
    cli_output: Option<PathBuf>,
    to_stdout: bool,
    config: &Config,
) -> ResolvedConvertSettings {
    ResolvedConvertSettings {
        input: cli_input.unwrap_or_else(|| config.input.clone()),
        output: cli_output.unwrap_or_else(|| config.output.clone()),
        to_stdout,
    }
}

/// Load config from a TOML file or return defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, RelayoutError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        RelayoutError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        RelayoutError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective settings as a single-line string (verbose mode).
pub fn format_effective_settings(
    settings: &ResolvedConvertSettings,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective settings [{source}]: input={}, output={}, stdout={}",
        settings.input.display(),
        settings.output.display(),
        settings.to_stdout
    )
}
