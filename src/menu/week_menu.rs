use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{date::LookupKey, parse, static_regex};

pub const DAYS_IN_WEEK: usize = 7;

/// One week of the cafeteria menu, one entry per day in the order the site
/// lists them. Each entry starts with its date token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeekMenuRecord")]
pub struct WeekMenu {
    entries: Vec<String>,
}

#[derive(Deserialize)]
struct WeekMenuRecord {
    entries: Vec<String>,
}

impl TryFrom<WeekMenuRecord> for WeekMenu {
    type Error = parse::Error;

    fn try_from(record: WeekMenuRecord) -> parse::Result<Self> {
        Self::new(record.entries)
    }
}

impl WeekMenu {
    pub fn new(entries: Vec<String>) -> parse::Result<Self> {
        if entries.len() != DAYS_IN_WEEK {
            return Err(parse::Error::row_count_error(DAYS_IN_WEEK, entries.len()));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Day of month of the week's first entry.
    pub fn first_day(&self) -> Option<u32> {
        self.entries.first().and_then(|e| day_of_month(e))
    }

    /// Day of month of the week's last entry.
    pub fn last_day(&self) -> Option<u32> {
        self.entries.last().and_then(|e| day_of_month(e))
    }

    /// The whole week joined by newlines for [`LookupKey::Week`], otherwise
    /// the first entry containing the date as a literal substring.
    pub fn lookup(&self, key: &LookupKey) -> Option<Cow<'_, str>> {
        match key {
            LookupKey::Week => Some(Cow::Owned(self.entries.join("\n"))),
            LookupKey::Date(date) if date.is_empty() => None,
            LookupKey::Date(date) => self
                .entries
                .iter()
                .find(|entry| entry.contains(date.as_str()))
                .map(|entry| Cow::Borrowed(entry.as_str())),
        }
    }
}

fn day_of_month(entry: &str) -> Option<u32> {
    static_regex!(LEADING_DAY <- r"^\s*(\d{1,2})\b");
    LEADING_DAY
        .captures(entry)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
