use crate::model::Stage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("No post titled \"{0}\"")]
    PostNotFound(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Cannot move \"{title}\" from {from} to {to}")]
    InvalidTransition { title: String, from: Stage, to: Stage },

    #[error("Template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GardenError>;
