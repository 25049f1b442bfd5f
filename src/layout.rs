use crate::consts::{FORMAT_DDMMYYYY, FORMAT_MMDDYYYY, FORMAT_YYYYDDMM, FORMAT_YYYYMMDD};
use crate::prelude::*;

/// Order in which the three date components are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DateLayout {
    #[display(fmt = "{}", FORMAT_DDMMYYYY)]
    DayMonthYear,
    #[display(fmt = "{}", FORMAT_MMDDYYYY)]
    MonthDayYear,
    #[display(fmt = "{}", FORMAT_YYYYDDMM)]
    YearDayMonth,
    #[default]
    #[display(fmt = "{}", FORMAT_YYYYMMDD)]
    YearMonthDay,
}

impl DateLayout {
    /// Resolves a format tag. Unknown tags fall back to year, month, day.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            FORMAT_DDMMYYYY => Self::DayMonthYear,
            FORMAT_MMDDYYYY => Self::MonthDayYear,
            FORMAT_YYYYDDMM => Self::YearDayMonth,
            _ => Self::YearMonthDay,
        }
    }

    /// Canonical tag for this layout
    pub const fn tag(self) -> &'static str {
        match self {
            Self::DayMonthYear => FORMAT_DDMMYYYY,
            Self::MonthDayYear => FORMAT_MMDDYYYY,
            Self::YearDayMonth => FORMAT_YYYYDDMM,
            Self::YearMonthDay => FORMAT_YYYYMMDD,
        }
    }

    /// Arranges `(year, month, day)` into output order.
    pub const fn arrange(self, year: u64, month: u32, day: u32) -> [u64; 3] {
        let (month, day) = (month as u64, day as u64);
        match self {
            Self::DayMonthYear => [day, month, year],
            Self::MonthDayYear => [month, day, year],
            Self::YearDayMonth => [year, day, month],
            Self::YearMonthDay => [year, month, day],
        }
    }
}
