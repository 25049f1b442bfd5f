/// Year of the default date
pub const DEFAULT_YEAR: u64 = 1970;
/// Month of the default date
pub const DEFAULT_MONTH: u32 = JANUARY;
/// Day of the default date
pub const DEFAULT_DAY: u32 = MIN_DAY;
/// Format tag used when none is given, and after a failed validation
pub const DEFAULT_FORMAT: &str = FORMAT_YYYYMMDD;
/// Delimiter used when none is given, and after a failed validation
pub const DEFAULT_DELIMITER: &str = ".";

/// Day, month, year
pub const FORMAT_DDMMYYYY: &str = "ddmmyyyy";
/// Month, day, year
pub const FORMAT_MMDDYYYY: &str = "mmddyyyy";
/// Year, day, month
pub const FORMAT_YYYYDDMM: &str = "yyyyddmm";
/// Year, month, day
pub const FORMAT_YYYYMMDD: &str = "yyyymmdd";

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;
/// Largest day accepted in any month
pub const MAX_DAY: u32 = 31;
/// First day of month
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for March
pub const MARCH: u32 = 3;
/// Month number for April
pub const APRIL: u32 = 4;
/// Month number for May
pub const MAY: u32 = 5;
/// Month number for June
pub const JUNE: u32 = 6;
/// Month number for July
pub const JULY: u32 = 7;
/// Month number for August
pub const AUGUST: u32 = 8;
/// Month number for September
pub const SEPTEMBER: u32 = 9;
/// Month number for October
pub const OCTOBER: u32 = 10;
/// Month number for November
pub const NOVEMBER: u32 = 11;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in February for non-leap years
pub const FEBRUARY_DAYS: u32 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;
/// Days in April, June, September and November
pub const SHORT_MONTH_DAYS: u32 = 30;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u64 = 400;
