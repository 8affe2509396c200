//! The read-eval loop. This is the only place that talks to the user; all
//! record handling goes through [`Phonebook`].

use std::io::{BufRead, Write};

use tracing::debug;

use super::command::{Command, ListAction, RecordAction, SearchAction};
use super::{check_position, get_input, prompt};
use crate::domain::{Edited, Field, NewRecord, Phonebook, Record, RecordKind, field::join_tokens};
use crate::errors::AppError;

enum Flow {
    Continue,
    Exit,
}

// Ends the current action with `Flow::Exit` once input runs out.
macro_rules! ask_or_exit {
    ($session:expr, $message:expr) => {
        match $session.ask($message)? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Session<'a, R, W> {
    phonebook: &'a mut Phonebook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(phonebook: &'a mut Phonebook, input: R, output: W) -> Self {
        Self {
            phonebook,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Serves actions until `exit` or end of input, then saves the phonebook.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            let Some(action) =
                self.ask("Enter action (add, remove, edit, count, list, search, exit):")?
            else {
                break;
            };

            let command = match action.trim().parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!(%err, "ignoring action");
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is_recoverable() => writeln!(self.output, "{}", err)?,
                Err(err) => return Err(err),
            }
            writeln!(self.output)?;
        }

        self.phonebook.save()
    }

    fn ask(&mut self, message: &str) -> Result<Option<String>, AppError> {
        prompt(&mut self.output, message)?;
        get_input(&mut self.input)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, AppError> {
        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Edit => self.edit(),
            Command::Count => {
                writeln!(
                    self.output,
                    "The phonebook has {} records.",
                    self.phonebook.count()
                )?;
                Ok(Flow::Continue)
            }
            Command::List => self.list(),
            Command::Search => self.search(),
            Command::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> Result<Flow, AppError> {
        let kind = ask_or_exit!(self, "Enter the type (person, organization):");

        let new = match kind.trim().parse::<RecordKind>()? {
            RecordKind::Person => NewRecord::Person {
                name: ask_or_exit!(self, "Enter the name of the person:"),
                surname: ask_or_exit!(self, "Enter the surname of the person:"),
                birth_date: ask_or_exit!(self, "Enter the birth date:"),
                gender: ask_or_exit!(self, "Enter the gender (M, F):"),
                number: ask_or_exit!(self, "Enter the number:"),
            },
            RecordKind::Organization => NewRecord::Organization {
                name: ask_or_exit!(self, "Enter the organization name:"),
                address: ask_or_exit!(self, "Enter the address:"),
                number: ask_or_exit!(self, "Enter the number:"),
            },
        };

        let added = self.phonebook.add_record(new)?;
        if added.number_rejected {
            writeln!(self.output, "Wrong number format!")?;
        }
        writeln!(self.output, "The record added.")?;
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow, AppError> {
        if self.phonebook.is_empty() {
            writeln!(self.output, "No records to remove!")?;
            return Ok(Flow::Continue);
        }

        self.print_names()?;
        let answer = ask_or_exit!(self, "Select a record:");
        let position = check_position(answer.trim().parse()?, self.phonebook.count())?;
        self.delete(position)
    }

    fn edit(&mut self) -> Result<Flow, AppError> {
        if self.phonebook.is_empty() {
            writeln!(self.output, "No records to edit!")?;
            return Ok(Flow::Continue);
        }

        self.print_names()?;
        let answer = ask_or_exit!(self, "Select a record:");
        let position = check_position(answer.trim().parse()?, self.phonebook.count())?;
        self.edit_fields(position)
    }

    fn list(&mut self) -> Result<Flow, AppError> {
        if self.phonebook.is_empty() {
            writeln!(self.output, "No records to list!")?;
            return Ok(Flow::Continue);
        }

        self.print_names()?;
        writeln!(self.output)?;

        let action = ask_or_exit!(self, "[list] Enter action ([number], back):");
        match action.trim().parse::<ListAction>()? {
            ListAction::Back => Ok(Flow::Continue),
            ListAction::Open(number) => {
                let position = check_position(number, self.phonebook.count())?;
                self.record_menu(position)
            }
        }
    }

    fn search(&mut self) -> Result<Flow, AppError> {
        loop {
            let query = ask_or_exit!(self, "Enter search query:");

            let hits: Vec<(usize, String)> = self
                .phonebook
                .search(&query)
                .into_iter()
                .map(|(position, record)| (position, record.title()))
                .collect();

            if hits.is_empty() {
                writeln!(self.output, "No matching records found.")?;
                return Ok(Flow::Continue);
            }

            writeln!(self.output, "Found {} results:", hits.len())?;
            for (number, (_, title)) in hits.iter().enumerate() {
                writeln!(self.output, "{}. {}", number + 1, title)?;
            }
            writeln!(self.output)?;

            let action = ask_or_exit!(self, "[search] Enter action ([number], back, again):");
            match action.trim().parse::<SearchAction>()? {
                SearchAction::Again => continue,
                SearchAction::Back => return Ok(Flow::Continue),
                SearchAction::Open(number) => {
                    let number = check_position(number, hits.len())?;
                    return self.record_menu(hits[number - 1].0);
                }
            }
        }
    }

    fn record_menu(&mut self, position: usize) -> Result<Flow, AppError> {
        loop {
            let shown = self
                .phonebook
                .get(position)
                .map(Record::to_string)
                .ok_or_else(|| AppError::NotFound(format!("Record #{}", position)))?;
            writeln!(self.output, "{}", shown)?;
            writeln!(self.output)?;

            let action = ask_or_exit!(self, "[record] Enter action (edit, delete, menu):");
            match action.trim().parse::<RecordAction>() {
                Ok(RecordAction::Edit) => {
                    if let Flow::Exit = self.edit_fields(position)? {
                        return Ok(Flow::Exit);
                    }
                }
                Ok(RecordAction::Delete) => return self.delete(position),
                Ok(RecordAction::Menu) => return Ok(Flow::Continue),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn edit_fields(&mut self, position: usize) -> Result<Flow, AppError> {
        let fields = self
            .phonebook
            .get(position)
            .map(Record::valid_fields)
            .ok_or_else(|| AppError::NotFound(format!("Record #{}", position)))?;

        let answer = ask_or_exit!(
            self,
            &format!("Select a field ({}):", join_tokens(fields))
        );
        let field = answer.trim();

        let is_valid = field
            .parse::<Field>()
            .is_ok_and(|parsed| fields.contains(&parsed));
        if !is_valid {
            writeln!(
                self.output,
                "Invalid field. It must be one of: {}.",
                join_tokens(fields)
            )?;
            return Ok(Flow::Continue);
        }

        let value = ask_or_exit!(self, &format!("Enter {}:", field));
        if let Edited::NumberRejected = self.phonebook.edit_record(position, field, &value)? {
            writeln!(self.output, "Wrong number format!")?;
        }
        writeln!(self.output, "The record updated!")?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self, position: usize) -> Result<Flow, AppError> {
        let id = self
            .phonebook
            .get(position)
            .map(Record::id)
            .ok_or_else(|| AppError::NotFound(format!("Record #{}", position)))?;

        let removed = self.phonebook.remove_record(id)?;
        writeln!(self.output, "Record {} removed successfully.", removed.name())?;
        Ok(Flow::Continue)
    }

    fn print_names(&mut self) -> Result<(), AppError> {
        for (position, name) in self.phonebook.list() {
            writeln!(self.output, "{}. {}", position, name)?;
        }
        Ok(())
    }
}
