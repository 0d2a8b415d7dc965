use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("could not start WebDriver session: {0}")]
    WebDriverSession(#[from] fantoccini::error::NewSessionError),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// An element lookup was made before any page was loaded.
    #[error("no page loaded")]
    NoPage,

    #[error("no element '{0}' on the page")]
    MissingElement(String),

    #[error("row {row:?} not in list table; rows were {rows:?}")]
    RowMissing { row: String, rows: Vec<String> },

    #[error("page text does not contain {0:?}")]
    TextMissing(String),

    #[error("local server database: {0}")]
    Database(#[from] lists_db::error::DatabaseError),

    #[error("local server socket: {0}")]
    Io(#[from] std::io::Error),
}
