use regex::Regex;
use std::sync::LazyLock;

use crate::errors::AppError;

// `\w` of the phone grammar is ASCII only.
const WORD: &str = "[A-Za-z0-9_]";

fn phone_pattern() -> String {
    let first_bracket = format!(r"\({WORD}+\)(?:[- ]{WORD}{{2,}})*");
    let second_bracket = format!(r"{WORD}+[- ]\({WORD}{{2,}}\)(?:[- ]{WORD}{{2,}})*");
    let no_bracket = format!(r"{WORD}+[- ]{WORD}{{2,}}(?:[- ]{WORD}{{2,}})*");

    format!(r"^\+?(?:{WORD}+|{first_bracket}|{second_bracket}|{no_bracket})$")
}

// Optional leading "+", then one of:
// a bare token, "(token)" with trailing groups,
// "token (group)" with trailing groups, or "token group ..." .
// Trailing groups are separated by "-" or " " and at least 2 chars long.
static PHONE_NUMBER: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(&phone_pattern()));

pub fn validate_number(number: &str) -> Result<bool, AppError> {
    let re = PHONE_NUMBER.as_ref().map_err(|err| AppError::Regex(err.clone()))?;
    Ok(re.is_match(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_compiles() {
        assert!(PHONE_NUMBER.is_ok());
    }

    #[test]
    fn accepts_plain_and_prefixed_numbers() -> Result<(), AppError> {
        assert!(validate_number("123456789")?);
        assert!(validate_number("+123456789")?);
        assert!(validate_number("a")?);
        assert!(validate_number("+(phone)")?);
        Ok(())
    }

    #[test]
    fn accepts_grouped_numbers() -> Result<(), AppError> {
        assert!(validate_number("(123) 456-789")?);
        assert!(validate_number("123 45 67")?);
        assert!(validate_number("+0 (123) 456-789-ABcd")?);
        assert!(validate_number("123-456 78")?);
        Ok(())
    }

    #[test]
    fn rejects_malformed_numbers() -> Result<(), AppError> {
        assert!(!validate_number("123*456")?);
        assert!(!validate_number("")?);
        assert!(!validate_number("1 2")?);
        assert!(!validate_number("(123) (456)")?);
        assert!(!validate_number("123 (456) (789)")?);
        assert!(!validate_number("123 (4)")?);
        assert!(!validate_number("++123")?);
        assert!(!validate_number("123 45\n")?);
        Ok(())
    }
}
