use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::field::Field;
use super::timestamp;
use crate::errors::AppError;

/// Display placeholder for an empty optional field.
pub const NO_DATA: &str = "[no data]";
/// Stored in place of a number rejected while editing.
pub const NO_NUMBER: &str = "[no number]";

const PERSON_FIELDS: &[Field] = &[
    Field::Name,
    Field::Surname,
    Field::Number,
    Field::BirthDate,
    Field::Gender,
];

const ORGANIZATION_FIELDS: &[Field] = &[Field::Name, Field::Address, Field::Number];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Person,
    Organization,
}

impl FromStr for RecordKind {
    type Err = AppError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "person" => Ok(RecordKind::Person),
            "organization" => Ok(RecordKind::Organization),
            _ => Err(AppError::UnknownKind(kind.to_string())),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Person => f.write_str("person"),
            RecordKind::Organization => f.write_str("organization"),
        }
    }
}

/// Fields shared by every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInfo {
    // Files written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: Uuid,

    pub(crate) name: String,

    #[serde(default)]
    pub(crate) number: String,

    #[serde(
        rename = "createdDate",
        alias = "createdAt",
        with = "crate::domain::timestamp"
    )]
    pub(crate) created_at: NaiveDateTime,

    #[serde(
        rename = "lastEditDate",
        alias = "lastEditedAt",
        with = "crate::domain::timestamp"
    )]
    pub(crate) last_edited_at: NaiveDateTime,
}

impl RecordInfo {
    fn new(name: String, number: String, at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            number,
            created_at: at,
            last_edited_at: at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(flatten)]
    pub(crate) info: RecordInfo,

    #[serde(default)]
    pub(crate) surname: String,

    #[serde(default)]
    pub(crate) birth_date: String,

    #[serde(default)]
    pub(crate) gender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(flatten)]
    pub(crate) info: RecordInfo,

    #[serde(default)]
    pub(crate) address: String,
}

/// A stored phonebook entry. Serialized with a `type` tag of
/// `person` or `organization`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Person(Person),
    Organization(Organization),
}

/// User supplied fields of a record that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Person {
        name: String,
        surname: String,
        birth_date: String,
        gender: String,
        number: String,
    },
    Organization {
        name: String,
        address: String,
        number: String,
    },
}

impl NewRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            NewRecord::Person { .. } => RecordKind::Person,
            NewRecord::Organization { .. } => RecordKind::Organization,
        }
    }

    pub fn number(&self) -> &str {
        match self {
            NewRecord::Person { number, .. } | NewRecord::Organization { number, .. } => number,
        }
    }

    /// Builds the record with both timestamps set to `at`.
    pub fn into_record(self, at: NaiveDateTime) -> Record {
        match self {
            NewRecord::Person {
                name,
                surname,
                birth_date,
                gender,
                number,
            } => Record::Person(Person {
                info: RecordInfo::new(name, number, at),
                surname,
                birth_date,
                gender,
            }),
            NewRecord::Organization {
                name,
                address,
                number,
            } => Record::Organization(Organization {
                info: RecordInfo::new(name, number, at),
                address,
            }),
        }
    }
}

impl Record {
    fn info(&self) -> &RecordInfo {
        match self {
            Record::Person(person) => &person.info,
            Record::Organization(organization) => &organization.info,
        }
    }

    pub(crate) fn info_mut(&mut self) -> &mut RecordInfo {
        match self {
            Record::Person(person) => &mut person.info,
            Record::Organization(organization) => &mut organization.info,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Person(_) => RecordKind::Person,
            Record::Organization(_) => RecordKind::Organization,
        }
    }

    pub fn id(&self) -> Uuid {
        self.info().id
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn number(&self) -> &str {
        &self.info().number
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.info().created_at
    }

    pub fn last_edited_at(&self) -> NaiveDateTime {
        self.info().last_edited_at
    }

    /// Fields a user may read, edit and search, in prompt order.
    pub fn valid_fields(&self) -> &'static [Field] {
        match self {
            Record::Person(_) => PERSON_FIELDS,
            Record::Organization(_) => ORGANIZATION_FIELDS,
        }
    }

    pub fn is_valid_field(&self, field: Field) -> bool {
        self.valid_fields().contains(&field)
    }

    /// Value of `field`, or `None` when this kind of record has no such field.
    pub fn get_field(&self, field: Field) -> Option<&str> {
        let value = match (self, field) {
            (_, Field::Name) => &self.info().name,
            (_, Field::Number) => &self.info().number,
            (Record::Person(person), Field::Surname) => &person.surname,
            (Record::Person(person), Field::BirthDate) => &person.birth_date,
            (Record::Person(person), Field::Gender) => &person.gender,
            (Record::Organization(organization), Field::Address) => &organization.address,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// String keyed form of [`Record::get_field`].
    pub fn property(&self, name: &str) -> Option<&str> {
        name.parse::<Field>()
            .ok()
            .and_then(|field| self.get_field(field))
    }

    /// Overwrites `field`. Leaves the record untouched when the field is not
    /// valid for this kind. The edit timestamp is the caller's concern.
    pub fn set_field(&mut self, field: Field, value: String) -> Result<(), AppError> {
        let slot = match (self, field) {
            (Record::Person(person), Field::Name) => &mut person.info.name,
            (Record::Person(person), Field::Number) => &mut person.info.number,
            (Record::Person(person), Field::Surname) => &mut person.surname,
            (Record::Person(person), Field::BirthDate) => &mut person.birth_date,
            (Record::Person(person), Field::Gender) => &mut person.gender,
            (Record::Organization(organization), Field::Name) => &mut organization.info.name,
            (Record::Organization(organization), Field::Number) => {
                &mut organization.info.number
            }
            (Record::Organization(organization), Field::Address) => &mut organization.address,
            (_, field) => return Err(AppError::InvalidField(field.token().to_string())),
        };
        *slot = value;
        Ok(())
    }

    pub fn set_property(&mut self, name: &str, value: String) -> Result<(), AppError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value)
    }

    /// One line label: full name for people, name for organizations.
    pub fn title(&self) -> String {
        match self {
            Record::Person(person) if !person.surname.is_empty() => {
                format!("{} {}", person.info.name, person.surname)
            }
            _ => self.name().to_string(),
        }
    }
}

fn or_no_data(value: &str) -> &str {
    if value.is_empty() { NO_DATA } else { value }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Person(person) => {
                writeln!(f, "Name: {}", person.info.name)?;
                writeln!(f, "Surname: {}", person.surname)?;
                writeln!(f, "Birth date: {}", or_no_data(&person.birth_date))?;
                writeln!(f, "Gender: {}", or_no_data(&person.gender))?;
            }
            Record::Organization(organization) => {
                writeln!(f, "Organization name: {}", organization.info.name)?;
                writeln!(f, "Address: {}", or_no_data(&organization.address))?;
            }
        }
        let info = self.info();
        writeln!(f, "Number: {}", or_no_data(&info.number))?;
        writeln!(f, "Time created: {}", timestamp::format(&info.created_at))?;
        write!(f, "Time last edit: {}", timestamp::format(&info.last_edited_at))
    }
}
