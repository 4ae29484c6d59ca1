#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTML Parse Error: {0}")]
    HtmlParse(String),
    #[error("Row Count Error: expected {expected} menu rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }

    pub const fn row_count_error(expected: usize, found: usize) -> Self {
        Self::RowCount { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
