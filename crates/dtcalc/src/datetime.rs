//! Absolute datetime literals.
//!
//! Recognizes the `today` and `now` keywords plus a fixed grid of date
//! formats crossed with optional time-of-day suffixes. A token either
//! matches one combination exactly or is not a datetime; there is no
//! partial matching and no guessing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::Clock;

/// Date formats, tried in order.
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%B/%d/%Y",
    "%B/%d/%y",
    "%b/%d/%Y",
    "%b/%d/%y",
    "%m/%d/%y",
    "%m/%d/%Y",
];

/// Time-of-day suffixes, tried in order for each date format.
const TIME_FORMATS: [&str; 5] = ["", "%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// Parse a datetime token.
///
/// `today` resolves to midnight of the clock's current date and `now` to the
/// clock's current date-time (both case-insensitive). Anything else must
/// match one of the date/time format combinations exactly; the first match
/// wins. Dates without a time component resolve to midnight.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dtcalc::clock::SystemClock;
/// use dtcalc::datetime::parse_datetime;
///
/// let dt = parse_datetime("12/25/2024 6:30 PM", &SystemClock).unwrap();
/// assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap().and_hms_opt(18, 30, 0).unwrap());
/// assert!(parse_datetime("tomorrow", &SystemClock).is_none());
/// ```
pub fn parse_datetime<C: Clock + ?Sized>(token: &str, clock: &C) -> Option<NaiveDateTime> {
    let token = token.trim();

    match token.to_ascii_lowercase().as_str() {
        "today" => return Some(clock.now().date().and_time(NaiveTime::MIN)),
        "now" => return Some(clock.now()),
        _ => {}
    }

    DATE_FORMATS
        .iter()
        .flat_map(|date_fmt| TIME_FORMATS.iter().map(move |time_fmt| (*date_fmt, *time_fmt)))
        .find_map(|(date_fmt, time_fmt)| parse_with_formats(token, date_fmt, time_fmt))
}

/// Try a single date/time format combination against the whole token.
///
/// Every space in a format must line up with a whitespace run in the token.
/// chrono lets a format space match nothing, so the token is split into
/// words first and each word is held to its own piece of the format.
fn parse_with_formats(token: &str, date_fmt: &str, time_fmt: &str) -> Option<NaiveDateTime> {
    let words: Vec<&str> = token.split_whitespace().collect();
    let (date_word, time_words) = words.split_first()?;

    let time_pieces = time_fmt.split_whitespace().count();
    if time_words.len() != time_pieces {
        return None;
    }

    let date = NaiveDate::parse_from_str(date_word, date_fmt).ok()?;
    if date_fmt.contains("%Y") && !has_four_digit_year(date_word, date_fmt) {
        return None;
    }

    let time = match time_words {
        [] => NaiveTime::MIN,
        [clock] => NaiveTime::parse_from_str(clock, time_fmt).ok()?,
        [clock, meridiem] if is_meridiem(meridiem) => {
            NaiveTime::parse_from_str(&format!("{clock} {meridiem}"), time_fmt).ok()?
        }
        _ => return None,
    };

    Some(date.and_time(time))
}

fn is_meridiem(word: &str) -> bool {
    word.eq_ignore_ascii_case("am") || word.eq_ignore_ascii_case("pm")
}

/// chrono's `%Y` also accepts 1–3 digit and signed years; a literal here
/// must spell out all four digits.
fn has_four_digit_year(date_word: &str, date_fmt: &str) -> bool {
    let year = if date_fmt.starts_with("%Y") {
        date_word.split('-').next()
    } else {
        date_word.rsplit('/').next()
    };

    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}
