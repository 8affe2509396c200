use super::*;

/// Case-insensitive substring match over every valid field of `record`.
/// A blank query matches everything; any other query is matched as typed.
pub fn record_matches(record: &Record, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    // `number` is a valid field of both kinds, so it is covered here too.
    record
        .valid_fields()
        .iter()
        .filter_map(|&field| record.get_field(field))
        .any(|value| value.to_lowercase().contains(&query))
}

impl Phonebook {
    /// Records matching `query`, with their 1-based positions, in store order.
    pub fn search(&self, query: &str) -> Vec<(usize, &Record)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record_matches(record, query))
            .map(|(index, record)| (index + 1, record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn phonebook() -> Result<Phonebook, AppError> {
        let mut book = Phonebook::new(Box::new(MemStorage::new()))?;
        book.add_record(NewRecord::Person {
            name: "John".to_string(),
            surname: "Smith".to_string(),
            birth_date: "".to_string(),
            gender: "M".to_string(),
            number: "123 456 789".to_string(),
        })?;
        book.add_record(NewRecord::Organization {
            name: "Pizza Shop".to_string(),
            address: "Smithfield Rd. 4".to_string(),
            number: "+0 (555) 010-99".to_string(),
        })?;
        book.add_record(NewRecord::Person {
            name: "Alice".to_string(),
            surname: "Jones".to_string(),
            birth_date: "1990-01-01".to_string(),
            gender: "F".to_string(),
            number: "".to_string(),
        })?;
        Ok(book)
    }

    fn positions(hits: Vec<(usize, &Record)>) -> Vec<usize> {
        hits.into_iter().map(|(position, _)| position).collect()
    }

    #[test]
    fn blank_query_matches_everything() -> Result<(), AppError> {
        let book = phonebook()?;

        assert_eq!(positions(book.search("")), vec![1, 2, 3]);
        assert_eq!(positions(book.search("   ")), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn matches_any_field_ignoring_case() -> Result<(), AppError> {
        let book = phonebook()?;

        assert_eq!(positions(book.search("SMITH")), vec![1, 2]);
        assert_eq!(positions(book.search("pizz")), vec![2]);
        assert_eq!(positions(book.search("1990")), vec![3]);
        Ok(())
    }

    #[test]
    fn matches_numbers() -> Result<(), AppError> {
        let book = phonebook()?;

        assert_eq!(positions(book.search("456")), vec![1]);
        assert_eq!(positions(book.search("(555)")), vec![2]);
        Ok(())
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_query() -> Result<(), AppError> {
        let book = phonebook()?;

        assert!(book.search("n ").is_empty());
        assert_eq!(positions(book.search("a s")), vec![2]);
        assert_eq!(positions(book.search(" shop")), vec![2]);
        Ok(())
    }

    #[test]
    fn no_match_is_empty() -> Result<(), AppError> {
        let book = phonebook()?;

        assert!(book.search("zebra").is_empty());
        Ok(())
    }

    #[test]
    fn search_does_not_touch_records() -> Result<(), AppError> {
        let book = phonebook()?;
        let before = book.records().to_vec();

        let _ = book.search("a");

        assert_eq!(book.records(), before.as_slice());
        Ok(())
    }
}
