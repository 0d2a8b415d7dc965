//! # lists-functional
//!
//! Drives superlists through a real browser: load a page, type into the
//! new-item box, press Enter, and read what is rendered.
//!
//! The browser is whatever WebDriver server `WEBDRIVER_URL` points at. When
//! it is unset, an HTTP client stands in: it submits the owning form and
//! follows redirects the same way, but runs no scripts and renders nothing.
//!
//! Tests run against a [`LiveServer`]: the URL in `STAGING_SERVER` when set,
//! otherwise a fresh local server on an ephemeral port with an in-memory
//! database.

mod browser;
mod error;
mod http_driver;
mod live_server;
mod page;
mod wait;
mod webdriver;

pub use browser::{Browser, WEBDRIVER_URL_ENV, webdriver_url};
pub use error::HarnessError;
pub use live_server::{LiveServer, STAGING_SERVER_ENV, staging_server};
pub use wait::{MAX_WAIT, POLL_INTERVAL, wait_for, wait_for_row_in_list_table, wait_for_text};
