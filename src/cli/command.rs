use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;
use crate::storage::stores::STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    version,
    about = "Interactive phonebook of people and organizations"
)]
pub struct Cli {
    /// JSON file the records are loaded from and saved to
    #[arg(long, env = "PHONEBOOK_FILE", default_value_t = String::from(STORAGE_PATH))]
    pub file: String,

    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,
}

/// Top level menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Edit,
    Count,
    List,
    Search,
    Exit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "add" => Ok(Command::Add),
            "remove" => Ok(Command::Remove),
            "edit" => Ok(Command::Edit),
            "count" => Ok(Command::Count),
            "list" => Ok(Command::List),
            "search" => Ok(Command::Search),
            "exit" => Ok(Command::Exit),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}

/// Actions offered after a listing: open a record by number or go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Open(usize),
    Back,
}

impl FromStr for ListAction {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "back" => Ok(ListAction::Back),
            number => Ok(ListAction::Open(number.parse()?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Open(usize),
    Back,
    Again,
}

impl FromStr for SearchAction {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "back" => Ok(SearchAction::Back),
            "again" => Ok(SearchAction::Again),
            number => Ok(SearchAction::Open(number.parse()?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Edit,
    Delete,
    Menu,
}

impl FromStr for RecordAction {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "edit" => Ok(RecordAction::Edit),
            "delete" => Ok(RecordAction::Delete),
            "menu" => Ok(RecordAction::Menu),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}
