use crate::codec::ImportPolicy;
use crate::error::{CanvasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_LIMIT: usize = 6;

/// Configuration for codecanvas, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanvasConfig {
    /// How `import` treats ids that already exist in the store
    #[serde(default)]
    pub import_policy: ImportPolicy,

    /// How many items the dashboard shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Where export files are written (current directory when unset)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            import_policy: ImportPolicy::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            export_dir: None,
        }
    }
}

impl CanvasConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CanvasError::Io)?;
        let config: CanvasConfig =
            serde_json::from_str(&content).map_err(CanvasError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CanvasError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CanvasError::Serialization)?;
        fs::write(config_path, content).map_err(CanvasError::Io)?;
        Ok(())
    }

    /// Sets a key from its command-line spelling.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "import-policy" => self.import_policy = value.parse()?,
            "recent-limit" => {
                self.recent_limit = value.parse().map_err(|_| {
                    CanvasError::Validation(format!("recent-limit must be a number, got {}", value))
                })?
            }
            "export-dir" => {
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => {
                return Err(CanvasError::Validation(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// `key = value` lines for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let policy = match self.import_policy {
            ImportPolicy::Append => "append",
            ImportPolicy::RegenerateIds => "regenerate-ids",
            ImportPolicy::RejectCollisions => "reject-collisions",
        };
        vec![
            ("import-policy", policy.to_string()),
            ("recent-limit", self.recent_limit.to_string()),
            (
                "export-dir",
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
        ]
    }
}
