use super::*;

use tracing::{info, warn};

/// Result of adding a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Added {
    /// 1-based position of the new record.
    pub position: usize,
    /// The supplied number failed validation and was stored empty.
    pub number_rejected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edited {
    Updated,
    /// The new number failed validation; [`NO_NUMBER`] was stored instead.
    NumberRejected,
}

/// Ordered, in-memory phonebook backed by a [`ContactStore`].
///
/// Positions taken and returned by the phonebook are 1-based, matching
/// the numbers shown to the user.
pub struct Phonebook {
    pub(crate) records: Vec<Record>,
    storage: Box<dyn ContactStore>,
}

impl Phonebook {
    /// Creates a phonebook and loads whatever `storage` holds.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut phonebook = Self {
            records: Vec::new(),
            storage,
        };
        phonebook.load()?;
        Ok(phonebook)
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.records = self.storage.load()?;
        info!(
            medium = self.medium(),
            count = self.records.len(),
            "records loaded"
        );
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.records)?;
        info!(
            medium = self.medium(),
            count = self.records.len(),
            "records saved"
        );
        Ok(())
    }

    pub fn medium(&self) -> &str {
        self.storage.get_medium()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
    }

    fn index_of(&self, position: usize) -> Result<usize, AppError> {
        match position.checked_sub(1) {
            Some(index) if index < self.records.len() => Ok(index),
            _ => Err(AppError::NotFound(format!("Record #{}", position))),
        }
    }

    /// Position and name of every record, in store order.
    pub fn list(&self) -> Vec<(usize, &str)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (index + 1, record.name()))
            .collect()
    }

    /// Appends a new record stamped with the current minute. A malformed
    /// number does not reject the record; it is stored empty instead.
    pub fn add_record(&mut self, new: NewRecord) -> Result<Added, AppError> {
        let number_rejected = !validate_number(new.number())?;
        let kind = new.kind();

        let mut record = new.into_record(timestamp::now());
        if number_rejected {
            warn!(%kind, number = record.number(), "wrong number format, storing none");
            record.info_mut().number = String::new();
        }

        info!(%kind, id = %record.id(), "record added");
        self.records.push(record);

        Ok(Added {
            position: self.records.len(),
            number_rejected,
        })
    }

    /// Sets one field of the record at `position`. `field` is the token the
    /// user typed; it must be one of the record's valid fields.
    pub fn edit_record(
        &mut self,
        position: usize,
        field: &str,
        value: &str,
    ) -> Result<Edited, AppError> {
        let index = self.index_of(position)?;
        let record = &mut self.records[index];

        let field = field.parse::<Field>()?;
        if !record.is_valid_field(field) {
            return Err(AppError::InvalidField(field.token().to_string()));
        }

        let mut outcome = Edited::Updated;
        let mut value = value.to_string();
        if field == Field::Number && !validate_number(&value)? {
            warn!(number = %value, "wrong number format, storing placeholder");
            value = NO_NUMBER.to_string();
            outcome = Edited::NumberRejected;
        }

        record.set_field(field, value)?;
        record.info_mut().last_edited_at = timestamp::now();

        info!(id = %record.id(), %field, "record edited");
        Ok(outcome)
    }

    /// Removes the record with `id`. Field-equal copies with other ids stay.
    pub fn remove_record(&mut self, id: Uuid) -> Result<Record, AppError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| AppError::NotFound("Record".to_string()))?;

        let removed = self.records.remove(index);
        info!(%id, name = removed.name(), "record removed");
        Ok(removed)
    }
}
