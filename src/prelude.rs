pub use crate::cli::{command, run_app, session::Session};
pub use crate::domain::{
    Added, Edited, Field, NO_DATA, NO_NUMBER, NewRecord, Phonebook, Record, RecordKind,
    field, record, timestamp,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStorage, MemStorage, StorageMediums};
pub use crate::validation::validate_number;
pub use uuid;
