use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use tracing::debug;

pub const STORAGE_PATH: &str = "records.json";

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Record>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            debug!(path = %self.path, "no records file yet");
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, records: &[Record]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let json_records = serde_json::to_string_pretty(records)?;
        file.write_all(json_records.as_bytes())?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
