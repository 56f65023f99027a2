// Navigation settings
// Loaded from ~/.config/gridnav/navigation.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pixel metrics and limits used by the navigation engine when the host does
/// not supply its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    // Grid metrics (pixels)
    #[serde(rename = "grid.defaultColumnWidth")]
    pub default_column_width: u32,

    #[serde(rename = "grid.rowHeight")]
    pub row_height: u32,

    // Initial viewport (pixels)
    #[serde(rename = "viewport.width")]
    pub viewport_width: u32,

    #[serde(rename = "viewport.height")]
    pub viewport_height: u32,

    // Labels
    #[serde(rename = "labels.maxHops")]
    pub max_label_hops: usize,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            default_column_width: 80,
            row_height: 24,
            viewport_width: 1280,
            viewport_height: 720,
            max_label_hops: 16,
        }
    }
}

impl NavigationSettings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridnav");
        config_dir.join("navigation.json")
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`. A missing or unreadable file yields the
    /// defaults; keys absent from the file keep their default values.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Error parsing {}: {}, using default settings", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, ignoring lines starting with `//`.
    pub fn parse(contents: &str) -> Result<Self, String> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        serde_json::from_str(&cleaned).map_err(|e| e.to_string())
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(path, json).map_err(|e| e.to_string())
    }
}
