use chrono::NaiveDate;

use super::LookupKey;

const TODAY: [&str; 2] = ["hoje", "today"];
const TOMORROW: [&str; 3] = ["amanha", "amanhã", "tomorrow"];
const WEEK: [&str; 2] = ["semana", "week"];

/// Resolves a command token against `reference` (normally the local date).
///
/// Keywords are matched case-insensitively. A bare number is a day of the
/// reference month; anything else is used as the date string unchanged.
pub fn resolve(token: &str, reference: NaiveDate) -> LookupKey {
    let keyword = token.to_lowercase();
    let keyword = keyword.as_str();
    if TODAY.contains(&keyword) {
        LookupKey::from_date(reference)
    } else if TOMORROW.contains(&keyword) {
        LookupKey::from_date(reference.succ_opt().unwrap_or(reference))
    } else if WEEK.contains(&keyword) {
        LookupKey::Week
    } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        LookupKey::Date(format!("{token:0>2}{}", reference.format(".%m.%Y")))
    } else {
        LookupKey::Date(token.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(s: &str) -> LookupKey {
        LookupKey::Date(s.to_owned())
    }

    #[test]
    fn test_today() {
        for reference in [date(10, 4, 2024), date(1, 1, 2000), date(29, 2, 2024)] {
            let expected = key(&reference.format("%d.%m.%Y").to_string());
            assert_eq!(resolve("hoje", reference), expected);
            assert_eq!(resolve("today", reference), expected);
            assert_eq!(resolve("HOJE", reference), expected);
        }
        assert_eq!(resolve("hoje", date(5, 3, 2021)), key("05.03.2021"));
    }

    #[test]
    fn test_tomorrow_rolls_over() {
        assert_eq!(resolve("amanha", date(10, 4, 2024)), key("11.04.2024"));
        assert_eq!(resolve("amanha", date(31, 1, 2021)), key("01.02.2021"));
        assert_eq!(resolve("tomorrow", date(28, 2, 2023)), key("01.03.2023"));
        assert_eq!(resolve("Amanhã", date(28, 2, 2024)), key("29.02.2024"));
        assert_eq!(resolve("amanha", date(31, 12, 2021)), key("01.01.2022"));
    }

    #[test]
    fn test_week_ignores_reference() {
        for reference in [date(10, 4, 2024), date(31, 12, 1999)] {
            assert_eq!(resolve("semana", reference), LookupKey::Week);
            assert_eq!(resolve("week", reference), LookupKey::Week);
            assert_eq!(resolve("Week", reference), LookupKey::Week);
        }
    }

    #[test]
    fn test_day_of_month() {
        let reference = date(10, 4, 2024);
        assert_eq!(resolve("15", reference), key("15.04.2024"));
        assert_eq!(resolve("5", reference), key("05.04.2024"));
        assert_eq!(resolve("05", reference), key("05.04.2024"));
    }

    #[test]
    fn test_passes_other_tokens_through() {
        let reference = date(10, 4, 2024);
        assert_eq!(resolve("15.03.2021", reference), key("15.03.2021"));
        assert_eq!(resolve("Sexta", reference), key("Sexta"));
        assert_eq!(resolve("", reference), key(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(LookupKey::Week.to_string(), "WEEK");
        assert_eq!(key("10.04.2024").to_string(), "10.04.2024");
    }
}
