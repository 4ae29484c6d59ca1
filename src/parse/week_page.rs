use scraper::{ElementRef, Html, Node};

use super::{remove_excess_whitespace, Error, Result};
use crate::{
    menu::{WeekMenu, DAYS_IN_WEEK},
    static_selector,
};

/// Builds a [`WeekMenu`] from the menu page: the first table row is the
/// header, the next seven rows are the days of the week.
pub fn week_menu_from_html(html: &Html) -> Result<WeekMenu> {
    static_selector!(ROW_SELECTOR <- "tr");
    let mut rows = html.select(&ROW_SELECTOR);
    if rows.next().is_none() {
        return Err(Error::html_parse_error("menu table not found"));
    }
    let rows: Vec<ElementRef> = rows.collect();
    if rows.len() < DAYS_IN_WEEK {
        return Err(Error::row_count_error(DAYS_IN_WEEK, rows.len()));
    }
    let entries = rows.into_iter().take(DAYS_IN_WEEK).map(row_text).collect();
    WeekMenu::new(entries)
}

/// Elements whose start separates words in the row text.
const WORD_BREAKS: [&str; 4] = ["td", "th", "br", "p"];

/// Text of a row. Inline markup is joined as is, so `10.04.<b>2024</b>`
/// stays one token; cells and line breaks become a single space.
fn row_text(row: ElementRef) -> String {
    let mut text = String::new();
    for node in row.descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if WORD_BREAKS.contains(&e.name()) => text.push(' '),
            _ => {}
        }
    }
    remove_excess_whitespace(&text).into_owned()
}
