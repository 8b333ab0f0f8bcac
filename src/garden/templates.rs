//! Default page templates written by `garden init`.
//!
//! The templates live as standalone HTML files next to this module so they can be
//! edited and previewed as pages, and are compiled in as string constants.

use crate::model::Stage;

pub const SEED_TEMPLATE: &str = include_str!("templates/seed-template.html");
pub const GROWING_TEMPLATE: &str = include_str!("templates/growing-template.html");
pub const HARVESTED_TEMPLATE: &str = include_str!("templates/harvested-template.html");
pub const ABANDONED_TEMPLATE: &str = include_str!("templates/abandoned-template.html");

pub fn default_template(stage: Stage) -> &'static str {
    match stage {
        Stage::Seed => SEED_TEMPLATE,
        Stage::Growing => GROWING_TEMPLATE,
        Stage::Harvested => HARVESTED_TEMPLATE,
        Stage::Abandoned => ABANDONED_TEMPLATE,
    }
}
