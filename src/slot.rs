//! Time slots and the compact time-token format.
//!
//! A token is a day symbol followed by either a single period (`월3`,
//! `Mon3`) or an inclusive period range (`화2-4`, `Tue2-4`). The day symbol
//! is one of the Korean weekday characters 월 화 수 목 금 토 일, or the
//! English abbreviation `Mon`..`Sun`.
//!
//! ```
//! use u_timetable::slot::{parse_token, Day, TimeSlot};
//!
//! let slots = parse_token("화2-4").unwrap();
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeSlot::new(Day::Tue, 2),
//!         TimeSlot::new(Day::Tue, 3),
//!         TimeSlot::new(Day::Tue, 4),
//!     ]
//! );
//! ```

use std::fmt;

use crate::error::{ParseError, ParseErrorKind};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in index order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Zero-based index, `Mon = 0` .. `Sun = 6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Korean single-character day symbol.
    pub fn symbol(self) -> char {
        ['월', '화', '수', '목', '금', '토', '일'][self.index()]
    }

    /// English three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][self.index()]
    }

    pub fn from_symbol(c: char) -> Option<Day> {
        Day::ALL.into_iter().find(|d| d.symbol() == c)
    }

    /// Splits a token into its day and the remaining period text.
    fn split_prefix(token: &str) -> Option<(Day, &str)> {
        let first = token.chars().next()?;
        if let Some(day) = Day::from_symbol(first) {
            return Some((day, &token[first.len_utf8()..]));
        }
        Day::ALL
            .into_iter()
            .find_map(|d| token.strip_prefix(d.abbrev()).map(|rest| (d, rest)))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// One class hour on one day: the atomic unit of occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSlot {
    pub day: Day,
    /// Class-hour index within the day, starting at 1.
    pub period: u32,
}

impl TimeSlot {
    pub fn new(day: Day, period: u32) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.day, self.period)
    }
}

/// Decodes a time token into its ordered slots.
///
/// A range expands to one slot per period, inclusive on both ends.
/// There is no upper bound on period values, and ranges are expanded
/// eagerly: `Mon1-4000000000` allocates four billion slots. Callers
/// accepting untrusted tokens should bound the span themselves.
///
/// # Errors
///
/// Returns [`ParseError`] for an empty token, an unknown day symbol, a
/// non-numeric or zero period, or a range whose end precedes its start.
pub fn parse_token(token: &str) -> Result<Vec<TimeSlot>, ParseError> {
    let fail = |kind| ParseError::new(token, kind);

    if token.is_empty() {
        return Err(fail(ParseErrorKind::Empty));
    }
    let (day, rest) = Day::split_prefix(token).ok_or_else(|| fail(ParseErrorKind::UnknownDay))?;

    let (start, end) = match rest.split_once('-') {
        Some((lo, hi)) => (parse_period(lo), parse_period(hi)),
        None => {
            let p = parse_period(rest);
            (p, p)
        }
    };
    let start = start.map_err(fail)?;
    let end = end.map_err(fail)?;
    if end < start {
        return Err(fail(ParseErrorKind::ReversedRange));
    }

    Ok((start..=end).map(|period| TimeSlot::new(day, period)).collect())
}

fn parse_period(text: &str) -> Result<u32, ParseErrorKind> {
    // `u32::from_str` accepts a leading '+', which is not part of the format.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidPeriod);
    }
    match text.parse::<u32>() {
        Ok(0) => Err(ParseErrorKind::ZeroPeriod),
        Ok(p) => Ok(p),
        Err(_) => Err(ParseErrorKind::InvalidPeriod),
    }
}
