use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

use super::DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// A date string searched for literally, normally `DD.MM.YYYY`.
    Date(String),
    /// Every day of the week.
    Week,
}

impl LookupKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Date(date.format(DATE_FORMAT).to_string())
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => f.write_str(date),
            Self::Week => f.write_str("WEEK"),
        }
    }
}
