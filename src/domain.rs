pub mod field;
pub mod phonebook;
pub mod record;
pub mod search;
pub mod timestamp;

use crate::{errors::AppError, storage::ContactStore, validation::validate_number};
use uuid::Uuid;

pub use field::Field;
pub use phonebook::{Added, Edited, Phonebook};
pub use record::{NO_DATA, NO_NUMBER, NewRecord, Organization, Person, Record, RecordKind};
