// src/data.rs

use crate::error::CatalogueError;
use crate::model::{Category, Test};
use serde::Deserialize;

/// Raw shape of `data/catalogue.yaml`.
#[derive(Deserialize, Debug, Default)]
pub struct CatalogueFile {
    pub categories: Vec<Category>,
    pub tests: Vec<Test>,
}

/// Reads the test bank embedded in the binary.
pub fn read_catalogue_embedded() -> Result<CatalogueFile, CatalogueError> {
    let file_content = include_str!("data/catalogue.yaml");
    read_catalogue_str(file_content)
}

pub fn read_catalogue_str(content: &str) -> Result<CatalogueFile, CatalogueError> {
    Ok(serde_yaml::from_str(content)?)
}
