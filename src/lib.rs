mod calendar;
mod consts;
mod input;
mod layout;
mod prelude;

pub use calendar::{days_in_month, is_leap_year, is_short_month};
pub use consts::*;
pub use input::{DateField, ReadError};
pub use layout::DateLayout;

use input::Tokens;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// A calendar date together with the way it should be written out.
///
/// Dates assigned in bulk (constructors, [`Date::read_from`], deserialization)
/// are checked against the calendar, and anything that fails the check is
/// replaced by the default date 1970-01-01 with the default format tag and
/// delimiter. The single-field setters skip this check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DateFields")]
pub struct Date {
    year: u64,
    month: u32,
    day: u32,
    format: String,
    delimiter: String,
}

impl Default for Date {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            day: DEFAULT_DAY,
            format: DEFAULT_FORMAT.to_owned(),
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }
}

impl Date {
    /// The default date: 1970-01-01, `yyyymmdd`, `.`
    pub fn new_default() -> Self {
        Self::default()
    }

    /// Creates a date with the default format and delimiter, or the default
    /// date if the day does not exist.
    pub fn new(year: u64, month: u32, day: u32) -> Self {
        Self::with_format_and_delimiter(year, month, day, DEFAULT_FORMAT, DEFAULT_DELIMITER)
    }

    /// Like [`Date::new`] with a format tag. The tag is dropped along with
    /// everything else if the date does not exist.
    pub fn with_format(year: u64, month: u32, day: u32, format: impl Into<String>) -> Self {
        Self::with_format_and_delimiter(year, month, day, format, DEFAULT_DELIMITER)
    }

    /// Like [`Date::new`] with a format tag and delimiter.
    pub fn with_format_and_delimiter(
        year: u64,
        month: u32,
        day: u32,
        format: impl Into<String>,
        delimiter: impl Into<String>,
    ) -> Self {
        let mut date = Self {
            year,
            month,
            day,
            format: format.into(),
            delimiter: delimiter.into(),
        };
        date.validate_or_reset();
        date
    }

    pub const fn year(&self) -> u64 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Format tag as stored, which may be one no layout recognises
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Layout the format tag resolves to
    pub fn layout(&self) -> DateLayout {
        DateLayout::from_tag(&self.format)
    }

    pub const fn set_year(&mut self, year: u64) {
        self.year = year;
    }

    pub const fn set_month(&mut self, month: u32) {
        self.month = month;
    }

    pub const fn set_day(&mut self, day: u32) {
        self.day = day;
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.delimiter = delimiter.into();
    }

    /// Advances the date by one day.
    ///
    /// The result is not checked; a date made invalid through the setters
    /// keeps counting up from wherever it is. The year saturates, so the last
    /// day of year `u64::MAX` steps back to January 1st of that same year.
    pub fn increase(&mut self) {
        if self.is_last_day_of_year() {
            self.year = self.year.saturating_add(1);
            self.month = JANUARY;
            self.day = MIN_DAY;
        } else if self.is_last_day_of_month() {
            self.month = self.month.saturating_add(1);
            self.day = MIN_DAY;
        } else {
            self.day = self.day.saturating_add(1);
        }
        trace!("Advanced to {}-{}-{}", self.year, self.month, self.day);
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    pub const fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year)
    }

    /// Whether the current fields would pass the check made on bulk
    /// assignment. Month 0 and day 0 are accepted.
    pub const fn is_valid_date(&self) -> bool {
        calendar::is_valid(self.year, self.month, self.day)
    }

    /// Reads `year month day` as three whitespace-separated integers,
    /// possibly spread over several lines.
    ///
    /// Each field takes the digits at the start of its token; anything after
    /// them (`23abc`, `23.`) is left in the reader. Fields are assigned one
    /// at a time; when a field is missing or does not start with a digit the
    /// remaining fields keep their values and the error is returned. The date is checked either way and reset to the default
    /// (format and delimiter included) if it does not exist. Format and
    /// delimiter are otherwise left alone.
    ///
    /// # Errors
    /// Returns `ReadError` if the input fails or does not hold three
    /// unsigned integers.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<(), ReadError> {
        let result = self.read_fields(&mut Tokens::new(reader));
        self.validate_or_reset();
        result
    }

    fn read_fields<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<(), ReadError> {
        self.year = tokens.next_field(DateField::Year)?;
        self.month = tokens.next_field(DateField::Month)?;
        self.day = tokens.next_field(DateField::Day)?;
        Ok(())
    }

    fn validate_or_reset(&mut self) {
        if !self.is_valid_date() {
            debug!(
                "Date {}-{}-{} does not exist, resetting to defaults",
                self.year, self.month, self.day
            );
            self.reset_to_defaults();
        }
    }

    const fn is_last_day_of_year(&self) -> bool {
        self.month == DECEMBER && self.day == MAX_DAY
    }

    const fn is_last_day_of_month(&self) -> bool {
        self.day == calendar::days_in_month(self.year, self.month)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.layout().arrange(self.year, self.month, self.day);
        let delimiter = &self.delimiter;
        write!(f, "{first}{delimiter}{second}{delimiter}{third}")
    }
}

/// Parses `year month day` into an otherwise default date.
///
/// Text after the third number is ignored.
impl FromStr for Date {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut date = Self::default();
        date.read_from(s.as_bytes())?;
        Ok(date)
    }
}

/// Wire shape of [`Date`]; converting it runs the same check as the
/// constructors.
#[derive(Deserialize)]
struct DateFields {
    year: u64,
    month: u32,
    day: u32,
    #[serde(default = "default_format")]
    format: String,
    #[serde(default = "default_delimiter")]
    delimiter: String,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_owned()
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_owned()
}

impl From<DateFields> for Date {
    fn from(fields: DateFields) -> Self {
        Self::with_format_and_delimiter(
            fields.year,
            fields.month,
            fields.day,
            fields.format,
            fields.delimiter,
        )
    }
}
