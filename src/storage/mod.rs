pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Record};
use std::fs;
use std::path::Path;
use tracing::debug;

pub use memory::MemStorage;
pub use stores::JsonStorage;

/// Where the phonebook keeps its records between runs.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Record>, AppError>;

    fn save(&self, records: &[Record]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_which(&self) -> &str {
        match self {
            StorageMediums::Json => "json",
            StorageMediums::Mem => "mem",
        }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "'{}' is not a recognized storage medium",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &str,
) -> Result<Box<dyn ContactStore>, AppError> {
    debug!(medium = medium.is_which(), path, "opening storage");
    match medium {
        StorageMediums::Json => Ok(Box::new(JsonStorage::new(path))),
        StorageMediums::Mem => Ok(Box::new(MemStorage::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
