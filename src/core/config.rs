use crate::config::Config;
use crate::config::migrate::repair_config_file;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Add defaults for keys missing from the configuration file.
    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}; run `init` first.",
                path.display()
            ));
            return Ok(());
        }

        let added = repair_config_file(path).map_err(|e| AppError::Config(e.to_string()))?;
        if added.is_empty() {
            success("Configuration is complete.");
        } else {
            info(format!("Added missing fields: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Open the configuration in an editor; fall back to the platform
    /// default when the requested one fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        } else {
            error(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ));
            Err(AppError::Config(format!(
                "no usable editor for {}",
                path.display()
            )))
        }
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
