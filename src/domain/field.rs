use std::{fmt, str::FromStr};

use crate::errors::AppError;

/// Editable record fields, addressed by the token a user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Surname,
    Number,
    BirthDate,
    Gender,
    Address,
}

impl Field {
    pub fn token(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Number => "number",
            Field::BirthDate => "birthDate",
            Field::Gender => "gender",
            Field::Address => "address",
        }
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "name" => Ok(Field::Name),
            "surname" => Ok(Field::Surname),
            "number" => Ok(Field::Number),
            "birthDate" | "birth" => Ok(Field::BirthDate),
            "gender" => Ok(Field::Gender),
            "address" => Ok(Field::Address),
            _ => Err(AppError::InvalidField(token.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Joins field tokens for prompts, e.g. `name, address, number`.
pub fn join_tokens(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::token)
        .collect::<Vec<&str>>()
        .join(", ")
}
