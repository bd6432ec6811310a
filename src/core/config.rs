use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use serde_yaml::Value;
use std::fs;
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

    /// Report the fields missing from the file on disk (they fall back to
    /// defaults at load time). Returns the missing field names.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}: defaults are in use",
                path.display()
            ));
            return Ok(Config::FIELDS.iter().map(|f| f.to_string()).collect());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let doc: Value =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

        let missing: Vec<String> = Config::FIELDS
            .iter()
            .filter(|f| doc.get(**f).is_none())
            .map(|f| f.to_string())
            .collect();

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for f in &missing {
                warning(format!("Missing field '{}' (default will be used)", f));
            }
        }

        Ok(missing)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }

        success(format!("Configuration file edited using '{}'", ed));
        Ok(())
    }
}
