use std::fs;

use anyhow::{Context, Result, bail};
use shared::config::client::Config;

/// Writes `config.<format>` with default settings into the working directory.
///
/// # Arguments
/// * `format` - `yaml`, `json`, or `toml`.
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file fails.
pub fn generate_config(format: &str) -> Result<()> {
    let file_name = match format {
        "yaml" => "config.yaml",
        "json" => "config.json",
        "toml" => "config.toml",
        _ => bail!("Unsupported format. Use 'yaml', 'json', or 'toml'."),
    };

    let serialized = Config::with_defaults().render(format)?;
    fs::write(file_name, serialized).with_context(|| format!("failed to write {file_name}"))?;

    println!("Configuration file '{file_name}' generated successfully.");
    Ok(())
}
