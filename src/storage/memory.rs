use std::cell::RefCell;

use super::{AppError, ContactStore, Record};

/// Keeps saved records for the lifetime of the process only.
#[derive(Debug)]
pub struct MemStorage {
    pub medium: String,
    data: RefCell<Vec<Record>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Record>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> Result<(), AppError> {
        *self.data.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
