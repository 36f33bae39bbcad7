use stoich::core::elements::{self, ELEMENT_COUNT, ElementInfo};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Element query cannot be empty.")]
    EmptyQuery,

    #[error("Atomic number {0} is out of range. Expected 1 to {max}.", max = ELEMENT_COUNT)]
    AtomicNumberOutOfRange(u64),

    #[error("Unknown element symbol: '{0}'. Symbols are case-sensitive (e.g., 'Na', not 'NA').")]
    UnknownSymbol(String),
}

/// Resolves a user query that is either an atomic number (`"11"`) or a symbol (`"Na"`).
pub fn parse_element_query(query: &str) -> Result<&'static ElementInfo, ParseError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ParseError::EmptyQuery);
    }

    if query.chars().all(|c| c.is_ascii_digit()) {
        let number: u64 = query.parse().unwrap_or(u64::MAX);
        return u8::try_from(number)
            .ok()
            .and_then(elements::by_atomic_number)
            .ok_or(ParseError::AtomicNumberOutOfRange(number));
    }

    elements::lookup(query).ok_or_else(|| ParseError::UnknownSymbol(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_symbols_and_atomic_numbers() {
        assert_eq!(parse_element_query("Na").unwrap().atomic_number, 11);
        assert_eq!(parse_element_query("11").unwrap().symbol, "Na");
        assert_eq!(parse_element_query(" Og ").unwrap().atomic_number, 118);
        assert_eq!(parse_element_query("001").unwrap().symbol, "H");
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert_eq!(
            parse_element_query("0"),
            Err(ParseError::AtomicNumberOutOfRange(0))
        );
        assert_eq!(
            parse_element_query("119"),
            Err(ParseError::AtomicNumberOutOfRange(119))
        );
        assert!(matches!(
            parse_element_query("99999999999999999999999"),
            Err(ParseError::AtomicNumberOutOfRange(_))
        ));
    }

    #[test]
    fn symbols_are_case_sensitive() {
        assert_eq!(
            parse_element_query("NA"),
            Err(ParseError::UnknownSymbol("NA".to_string()))
        );
        assert!(parse_element_query("na").is_err());
        assert_eq!(parse_element_query(""), Err(ParseError::EmptyQuery));
    }
}
