use crate::commands::{CmdMessage, CmdResult};
use crate::config::CONFIG_FILENAME;
use crate::error::Result;
use crate::layout::GardenLayout;
use crate::model::Stage;
use crate::templates::default_template;
use std::fs;

/// Creates the stage directories, the default templates, an empty store and a
/// `garden.json` holding the settings in use. Existing files are left untouched.
pub fn run(layout: &GardenLayout) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for stage in Stage::ALL {
        fs::create_dir_all(layout.stage_dir(stage))?;
    }
    fs::create_dir_all(layout.templates_dir())?;

    for stage in Stage::ALL {
        let path = layout.template_path(stage);
        if path.exists() {
            result.add_message(CmdMessage::info(format!(
                "Keeping existing template {}",
                path.display()
            )));
            continue;
        }
        fs::write(&path, default_template(stage))?;
        result.add_message(CmdMessage::info(format!(
            "Wrote template {}",
            path.display()
        )));
    }

    let store_path = layout.store_path();
    if !store_path.exists() {
        fs::write(&store_path, "[]")?;
    }

    if !layout.root().join(CONFIG_FILENAME).exists() {
        layout.config().save(layout.root())?;
        result.add_message(CmdMessage::info(format!("Wrote {}", CONFIG_FILENAME)));
    }

    result.add_message(CmdMessage::success(format!(
        "Initialized garden at {}",
        layout.root().display()
    )));
    Ok(result)
}
