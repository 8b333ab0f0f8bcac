//! Where things live inside a garden root.
//!
//! ```text
//! <root>/
//! ├── posts.json              # the post store
//! ├── garden.json             # optional config
//! ├── seeds/ growing/ harvested/ abandoned/
//! └── templates/<stage>-template.html
//! ```

use crate::config::GardenConfig;
use crate::error::Result;
use crate::model::{file_name_for, Stage};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GardenLayout {
    root: PathBuf,
    config: GardenConfig,
}

impl GardenLayout {
    pub fn new(root: impl Into<PathBuf>, config: GardenConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Layout for `root`, reading `garden.json` when present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = GardenConfig::load(&root)?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(&self.config.store_file)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.config.templates_dir)
    }

    pub fn template_path(&self, stage: Stage) -> PathBuf {
        self.templates_dir()
            .join(format!("{}-template.html", stage.as_str()))
    }

    pub fn stage_dir(&self, stage: Stage) -> PathBuf {
        self.root.join(self.config.stage_dirs.for_stage(stage))
    }

    pub fn page_path(&self, stage: Stage, title: &str) -> PathBuf {
        self.stage_dir(stage).join(file_name_for(title))
    }

    /// The `link` stored for a post: always `/` separated, since the browser
    /// resolves it as a URL.
    pub fn link_for(&self, stage: Stage, title: &str) -> String {
        format!(
            "{}/{}",
            self.config.stage_dirs.for_stage(stage),
            file_name_for(title)
        )
    }
}
