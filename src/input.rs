use std::io::{self, BufRead};
use std::str::FromStr;

use crate::prelude::*;

/// Component of a date being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Failure to read the three integers of a date from a stream.
///
/// This only covers the input syntax. A date that reads fine but fails the
/// calendar check is not an error; it is reset to the default date instead.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input ended before the field could be read.
    #[error("Missing {field}: input ended")]
    MissingField { field: DateField },

    /// Token does not start with a digit, or its digits are out of range
    /// for the field.
    #[error("Invalid {field}: {token:?} is not a number")]
    InvalidNumber { field: DateField, token: String },
}

/// Longest run of bytes kept for one field: one past the 20 digits of
/// `u64::MAX`, so anything longer fails to parse instead of being cut short.
const MAX_TOKEN_LEN: usize = 21;

/// What the reader found where a field was expected.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Lexeme {
    /// Input ended.
    End,
    /// Leading digits of a token.
    Digits(String),
    /// A token that does not start with a digit.
    Other(String),
}

/// Reads numbers from a buffered reader the way a text stream extracts
/// them: leading whitespace is skipped, the run of digits that follows is
/// taken, and everything after it stays in the reader.
pub(crate) struct Tokens<R> {
    reader: R,
}

impl<R: BufRead> Tokens<R> {
    pub(crate) const fn new(reader: R) -> Self {
        Self { reader }
    }

    pub(crate) fn next_lexeme(&mut self) -> io::Result<Lexeme> {
        self.skip_whitespace()?;

        let digits = self.take_while(|b| b.is_ascii_digit())?;
        if !digits.is_empty() {
            return Ok(Lexeme::Digits(lossy(&digits)));
        }

        let other = self.take_while(|b| !b.is_ascii_whitespace())?;
        if other.is_empty() {
            Ok(Lexeme::End)
        } else {
            Ok(Lexeme::Other(lossy(&other)))
        }
    }

    /// Reads and parses the next number as `field`.
    pub(crate) fn next_field<T: FromStr>(&mut self, field: DateField) -> Result<T, ReadError> {
        match self.next_lexeme()? {
            Lexeme::End => Err(ReadError::MissingField { field }),
            Lexeme::Digits(token) => token
                .parse()
                .map_err(|_| ReadError::InvalidNumber { field, token }),
            Lexeme::Other(token) => Err(ReadError::InvalidNumber { field, token }),
        }
    }

    /// Consumes bytes matching `pred`, at most `MAX_TOKEN_LEN` of them.
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<Vec<u8>> {
        let mut taken = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(taken);
            }
            let room = MAX_TOKEN_LEN - taken.len();
            let run = buf.iter().take(room).take_while(|&&b| pred(b)).count();
            let stopped = run < buf.len();
            taken.extend_from_slice(&buf[..run]);
            self.reader.consume(run);
            if stopped || taken.len() == MAX_TOKEN_LEN {
                return Ok(taken);
            }
        }
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            let skip = buf
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();
            let exhausted = skip == buf.len();
            self.reader.consume(skip);
            if !exhausted {
                return Ok(());
            }
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn digits(s: &str) -> Lexeme {
        Lexeme::Digits(s.to_owned())
    }

    #[test]
    fn test_lexemes_across_lines() {
        let mut tokens = Tokens::new(Cursor::new("  2023\n\t6 \n\n23  "));
        assert_eq!(tokens.next_lexeme().unwrap(), digits("2023"));
        assert_eq!(tokens.next_lexeme().unwrap(), digits("6"));
        assert_eq!(tokens.next_lexeme().unwrap(), digits("23"));
        assert_eq!(tokens.next_lexeme().unwrap(), Lexeme::End);
    }

    #[test]
    fn test_digits_stop_at_first_non_digit() {
        let mut cursor = Cursor::new("23abc 5");
        {
            let mut tokens = Tokens::new(&mut cursor);
            assert_eq!(tokens.next_lexeme().unwrap(), digits("23"));
        }
        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "abc 5");
    }

    #[test]
    fn test_non_digit_token() {
        let mut tokens = Tokens::new(Cursor::new(".6.23 7"));
        assert_eq!(
            tokens.next_lexeme().unwrap(),
            Lexeme::Other(".6.23".to_owned())
        );
        assert_eq!(tokens.next_lexeme().unwrap(), digits("7"));
    }

    #[test]
    fn test_lexemes_leave_rest_unread() {
        let mut cursor = Cursor::new("2023 6 23 tail");
        {
            let mut tokens = Tokens::new(&mut cursor);
            for _ in 0..3 {
                tokens.next_lexeme().unwrap();
            }
        }
        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_digits_span_buffer_boundaries() {
        // Capacity of 2 forces runs to be split across refills
        let reader = BufReader::with_capacity(2, "12345   678x".as_bytes());
        let mut tokens = Tokens::new(reader);
        assert_eq!(tokens.next_lexeme().unwrap(), digits("12345"));
        assert_eq!(tokens.next_lexeme().unwrap(), digits("678"));
        assert_eq!(tokens.next_lexeme().unwrap(), Lexeme::Other("x".to_owned()));
        assert_eq!(tokens.next_lexeme().unwrap(), Lexeme::End);
    }

    #[test]
    fn test_long_digit_run_is_bounded() {
        let input = "9".repeat(10_000);
        let mut tokens = Tokens::new(BufReader::with_capacity(8, input.as_bytes()));
        match tokens.next_lexeme().unwrap() {
            Lexeme::Digits(run) => assert_eq!(run.len(), MAX_TOKEN_LEN),
            other => panic!("expected digits, got {other:?}"),
        }

        let mut tokens = Tokens::new(input.as_bytes());
        let result = tokens.next_field::<u64>(DateField::Year);
        assert!(matches!(
            result,
            Err(ReadError::InvalidNumber { field: DateField::Year, ref token })
                if token.len() == MAX_TOKEN_LEN
        ));
    }

    #[test]
    fn test_widest_year_parses() {
        let mut tokens = Tokens::new("18446744073709551615".as_bytes());
        assert_eq!(tokens.next_field::<u64>(DateField::Year).unwrap(), u64::MAX);

        let mut tokens = Tokens::new("18446744073709551616".as_bytes());
        let result = tokens.next_field::<u64>(DateField::Year);
        assert!(matches!(result, Err(ReadError::InvalidNumber { .. })));
    }

    #[test]
    fn test_next_field_errors() {
        let mut tokens = Tokens::new(Cursor::new("12 x"));
        assert_eq!(tokens.next_field::<u32>(DateField::Month).unwrap(), 12);

        let err = tokens.next_field::<u32>(DateField::Day).unwrap_err();
        assert!(matches!(
            err,
            ReadError::InvalidNumber { field: DateField::Day, ref token } if token == "x"
        ));
        assert_eq!(err.to_string(), r#"Invalid day: "x" is not a number"#);

        let err = tokens.next_field::<u32>(DateField::Year).unwrap_err();
        assert!(matches!(
            err,
            ReadError::MissingField {
                field: DateField::Year
            }
        ));
    }

    #[test]
    fn test_negative_is_not_a_number() {
        let mut tokens = Tokens::new(Cursor::new("-5"));
        let result = tokens.next_field::<u64>(DateField::Year);
        assert!(matches!(
            result,
            Err(ReadError::InvalidNumber { ref token, .. }) if token == "-5"
        ));
    }
}
