mod error;
pub mod pattern;
mod remove_excess_whitespace;
mod week_page;

pub use error::{Error, Result};
pub use remove_excess_whitespace::remove_excess_whitespace;
pub use week_page::week_menu_from_html;

#[cfg(test)]
pub(crate) use week_page::tests::WEEK_PAGE;
