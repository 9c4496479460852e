use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use flowlint_core::config::{Settings, SETTINGS_FILE};

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let settings_path = project_root.join(SETTINGS_FILE);
    if settings_path.exists() && !force {
        println!(
            "Settings file already exists: {} (use --force to overwrite)",
            settings_path.display()
        );
        return Ok(());
    }

    let contents = serde_json::to_string_pretty(&Settings::default())
        .context("Failed to serialize default settings")?;
    fs::write(&settings_path, contents)
        .with_context(|| format!("Failed to write {}", settings_path.display()))?;

    info!("Created settings file: {}", settings_path.display());
    println!("✅ Created {}", settings_path.display());

    Ok(())
}
