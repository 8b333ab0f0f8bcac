use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Stage;
use crate::store::PostStore;

use super::helpers::numbered;

/// Posts in any of `stages` (all posts when empty), numbered the way the
/// stage commands count them.
pub fn run<S: PostStore>(store: &S, stages: &[Stage]) -> Result<CmdResult> {
    let posts = store.load()?;
    Ok(CmdResult::default().with_listed_posts(numbered(&posts, stages)))
}
