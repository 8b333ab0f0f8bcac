use crate::error::{GardenError, Result};
use crate::model::Stage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "garden.json";

/// Directory names for each stage, relative to the garden root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StageDirs {
    pub seed: String,
    pub growing: String,
    pub harvested: String,
    pub abandoned: String,
}

impl Default for StageDirs {
    fn default() -> Self {
        Self {
            seed: "seeds".to_string(),
            growing: "growing".to_string(),
            harvested: "harvested".to_string(),
            abandoned: "abandoned".to_string(),
        }
    }
}

impl StageDirs {
    pub fn for_stage(&self, stage: Stage) -> &str {
        match stage {
            Stage::Seed => &self.seed,
            Stage::Growing => &self.growing,
            Stage::Harvested => &self.harvested,
            Stage::Abandoned => &self.abandoned,
        }
    }
}

/// Configuration for a garden, stored in `<root>/garden.json`.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GardenConfig {
    /// Post store file name
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Directory holding `<stage>-template.html` files
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    #[serde(default)]
    pub stage_dirs: StageDirs,

    /// `id` of the element whose inner HTML is the post content
    #[serde(default = "default_content_id")]
    pub content_id: String,

    /// `id` of the "last updated" marker rewritten by sync
    #[serde(default = "default_updated_marker_id")]
    pub updated_marker_id: String,

    /// Prefix written before the date inside the marker
    #[serde(default = "default_updated_marker_label")]
    pub updated_marker_label: String,
}

fn default_store_file() -> String {
    "posts.json".to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_content_id() -> String {
    "content".to_string()
}

fn default_updated_marker_id() -> String {
    "updated_date".to_string()
}

fn default_updated_marker_label() -> String {
    "<b>Data Updated:</b>".to_string()
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            templates_dir: default_templates_dir(),
            stage_dirs: StageDirs::default(),
            content_id: default_content_id(),
            updated_marker_id: default_updated_marker_id(),
            updated_marker_label: default_updated_marker_label(),
        }
    }
}

impl GardenConfig {
    /// Load config from the garden root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            GardenError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();
        if !root.exists() {
            fs::create_dir_all(root)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(root.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
