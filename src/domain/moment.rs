//! Fallback parsing for dates and times
//!
//! User input is matched against a short, ordered list of known formats.
//! The first format that parses wins. When none match, the original text is
//! kept verbatim and rendered unchanged, so an unfamiliar date is never an
//! error, only a loss of structure.
//!
//! | Value | Formats (in order) |
//! |-------|--------------------|
//! | Date + time | `2019-12-02 18:00`, `2019-12-02 1800`, `2/12/2019 18:00`, `2/12/2019 1800` |
//! | Date | `2019-12-02`, `2/12/2019` |
//! | Time | `18:00`, `1800`, `6:00pm`, `6:00 pm` |

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H%M",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %H%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M", "%H%M", "%I:%M%p", "%I:%M %p"];

/// Display form for dates, e.g. `Dec 02 2019`
const DATE_DISPLAY: &str = "%b %d %Y";

/// Display form for times, e.g. `6:00 pm`
const TIME_DISPLAY: &str = "%-I:%M %P";

/// A value that can be recognised from free text and written back out
pub trait Temporal: Sized {
    /// Tries each known format in order
    fn recognise(text: &str) -> Option<Self>;

    /// Human-readable form shown to the user
    fn display(&self) -> String;

    /// Canonical form written to the data file; must parse back via `recognise`
    fn canonical(&self) -> String;
}

impl Temporal for NaiveDate {
    fn recognise(text: &str) -> Option<Self> {
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }

    fn display(&self) -> String {
        self.format(DATE_DISPLAY).to_string()
    }

    fn canonical(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl Temporal for NaiveTime {
    fn recognise(text: &str) -> Option<Self> {
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
    }

    fn display(&self) -> String {
        self.format(TIME_DISPLAY).to_string()
    }

    fn canonical(&self) -> String {
        self.format("%H:%M").to_string()
    }
}

impl Temporal for NaiveDateTime {
    fn recognise(text: &str) -> Option<Self> {
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    }

    fn display(&self) -> String {
        format!(
            "{}, {}",
            self.format(DATE_DISPLAY),
            self.format(TIME_DISPLAY)
        )
    }

    fn canonical(&self) -> String {
        self.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// A parsed value, or the raw text when no format matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Moment<T> {
    Parsed(T),
    Raw(String),
}

impl<T: Temporal> Moment<T> {
    /// Recognises `text`, keeping it verbatim on failure
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match T::recognise(text) {
            Some(value) => Moment::Parsed(value),
            None => Moment::Raw(text.to_string()),
        }
    }

    /// Returns the parsed value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Moment::Parsed(value) => Some(value),
            Moment::Raw(_) => None,
        }
    }

    /// Returns true if no format matched
    pub fn is_raw(&self) -> bool {
        matches!(self, Moment::Raw(_))
    }

    pub fn display(&self) -> String {
        match self {
            Moment::Parsed(value) => value.display(),
            Moment::Raw(text) => text.clone(),
        }
    }

    pub fn canonical(&self) -> String {
        match self {
            Moment::Parsed(value) => value.canonical(),
            Moment::Raw(text) => text.clone(),
        }
    }
}
