use anyhow::{Context, Result, bail};
use std::path::Path;
use rpawogen::configtool::AppConfig;

pub fn show_config(path: &Path, config: &AppConfig) -> Result<()> {
    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("(not found, showing defaults)");
    }
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    AppConfig::default()
        .save_config(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("✅ Default config written to {}", path.display());
    Ok(())
}
