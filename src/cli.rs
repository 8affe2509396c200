pub mod command;
pub mod run;
pub mod session;

use crate::errors::AppError;
use std::io::{BufRead, Write};

pub use run::run_app;

// OUTPUT FUNCTIONS
pub fn prompt<W: Write>(output: &mut W, message: &str) -> Result<(), AppError> {
    writeln!(output, "{}", message)?;
    output.flush()?;
    Ok(())
}

// INPUT FUNCTIONS

/// Next line without its line terminator, `None` once input ends.
/// Values are kept exactly as typed; callers trim command tokens themselves.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Checks a 1-based position picked from a listing of `count` entries.
pub fn check_position(position: usize, count: usize) -> Result<usize, AppError> {
    if position == 0 || position > count {
        return Err(AppError::NotFound(format!("Record #{}", position)));
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn get_input_strips_only_line_endings() -> Result<(), AppError> {
        let mut input = Cursor::new("  add \r\n123 \nlist");

        assert_eq!(get_input(&mut input)?, Some("  add ".to_string()));
        assert_eq!(get_input(&mut input)?, Some("123 ".to_string()));
        assert_eq!(get_input(&mut input)?, Some("list".to_string()));
        assert_eq!(get_input(&mut input)?, None);
        Ok(())
    }

    #[test]
    fn positions_outside_listing_are_not_found() -> Result<(), AppError> {
        assert_eq!(check_position(2, 2)?, 2);
        assert!(matches!(check_position(0, 2), Err(AppError::NotFound(_))));
        assert!(matches!(check_position(3, 2), Err(AppError::NotFound(_))));
        Ok(())
    }
}
