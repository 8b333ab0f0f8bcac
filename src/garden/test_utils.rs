use crate::api::GardenApi;
use crate::config::GardenConfig;
use crate::layout::GardenLayout;
use crate::model::Stage;
use crate::store::fs::JsonFileStore;
use crate::templates::default_template;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scaffolded garden in a temporary directory.
pub struct TestGarden {
    // Held so the directory lives as long as the fixture
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub layout: GardenLayout,
    pub store: JsonFileStore,
}

impl Default for TestGarden {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGarden {
    /// Garden with the default templates and no posts.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let layout = GardenLayout::new(&root, GardenConfig::default());

        fs::create_dir_all(layout.templates_dir()).expect("failed to create templates dir");
        for stage in Stage::ALL {
            fs::write(layout.template_path(stage), default_template(stage))
                .expect("failed to write template");
        }

        let store = JsonFileStore::new(layout.store_path());
        Self {
            _temp_dir: temp_dir,
            root,
            layout,
            store,
        }
    }

    /// Replaces the template of `stage`.
    pub fn with_template(self, stage: Stage, source: &str) -> Self {
        fs::write(self.layout.template_path(stage), source).expect("failed to write template");
        self
    }

    pub fn api(&self) -> GardenApi<JsonFileStore> {
        GardenApi::new(JsonFileStore::new(self.layout.store_path()), self.layout.clone())
    }

    pub fn page(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn read_page(&self, relative: impl AsRef<Path>) -> String {
        fs::read_to_string(self.page(relative)).expect("failed to read page")
    }
}
