/// Site configuration loaded from an optional `portfolio.json` in the
/// portfolio folder
///
/// Everything has a default, so a bare folder of images works with no
/// config at all. A missing file is silently fine; a malformed one is
/// reported and replaced with the defaults rather than aborting.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Filename looked up inside the portfolio folder
pub const CONFIG_FILENAME: &str = "portfolio.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the hero and the window
    pub title: String,
    /// Hero tagline under the headline
    pub tagline: String,
    /// About-section copy
    pub about: String,
    /// Footer contact line
    pub contact: String,
    /// Parallax speed applied to the about image
    pub about_image_speed: f32,
    /// Draw the custom cursor layer
    pub custom_cursor: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "ANA FOTOS".to_string(),
            tagline: "Photography portfolio".to_string(),
            about: "Fine art photography — light, shadow, and the quiet in between."
                .to_string(),
            contact: "hello@anafotos.example".to_string(),
            about_image_speed: 0.6,
            custom_cursor: true,
        }
    }
}

impl SiteConfig {
    /// Load the config from `folder`, falling back to defaults
    pub fn load(folder: &Path) -> Self {
        let path = folder.join(CONFIG_FILENAME);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                println!("📝 Loaded site config from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("⚠️  Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
