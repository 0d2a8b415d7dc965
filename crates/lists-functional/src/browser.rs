use reqwest::{StatusCode, Url};

use crate::error::HarnessError;
use crate::http_driver::HttpDriver;
use crate::webdriver::WebDriver;

/// Environment variable naming a WebDriver server, e.g. `http://localhost:4444`.
pub const WEBDRIVER_URL_ENV: &str = "WEBDRIVER_URL";

/// The WebDriver server, if one is configured.
#[must_use]
pub fn webdriver_url() -> Option<String> {
    std::env::var(WEBDRIVER_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

enum Driver {
    Http(HttpDriver),
    WebDriver(WebDriver),
}

/// One visitor's browser session.
///
/// A real browser when `WEBDRIVER_URL` is set, otherwise an HTTP client that
/// submits forms and follows redirects the same way. Every session starts
/// fresh: nothing is shared between two `Browser`s.
pub struct Browser {
    driver: Driver,
}

impl Browser {
    /// Open a session with the configured driver.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError` if the WebDriver session cannot be started or
    /// the HTTP client cannot be built.
    pub async fn open() -> Result<Self, HarnessError> {
        match webdriver_url() {
            Some(url) => Self::webdriver(&url).await,
            None => Self::http(),
        }
    }

    /// # Errors
    ///
    /// Returns `HarnessError::Http` if the HTTP client cannot be built.
    pub fn http() -> Result<Self, HarnessError> {
        Ok(Self {
            driver: Driver::Http(HttpDriver::new()?),
        })
    }

    /// # Errors
    ///
    /// Returns `HarnessError::WebDriverSession` if no session can be started.
    pub async fn webdriver(url: &str) -> Result<Self, HarnessError> {
        Ok(Self {
            driver: Driver::WebDriver(WebDriver::connect(url).await?),
        })
    }

    #[must_use]
    pub const fn is_webdriver(&self) -> bool {
        matches!(self.driver, Driver::WebDriver(_))
    }

    /// Navigate to an absolute URL.
    pub async fn visit(&mut self, url: &str) -> Result<(), HarnessError> {
        let url = Url::parse(url).map_err(|e| HarnessError::InvalidUrl(format!("{url}: {e}")))?;
        match &mut self.driver {
            Driver::Http(http) => http.visit(url).await,
            Driver::WebDriver(wd) => wd.visit(&url).await,
        }
    }

    /// Reload the current page.
    pub async fn refresh(&mut self) -> Result<(), HarnessError> {
        match &mut self.driver {
            Driver::Http(http) => http.refresh().await,
            Driver::WebDriver(wd) => wd.refresh().await,
        }
    }

    /// Type `text` into the input with `input_id` and press Enter.
    ///
    /// In a real browser the next page may still be loading when this
    /// returns; check it with [`wait_for`](crate::wait_for).
    pub async fn type_and_submit(&mut self, input_id: &str, text: &str) -> Result<(), HarnessError> {
        match &mut self.driver {
            Driver::Http(http) => http.type_and_submit(input_id, text).await,
            Driver::WebDriver(wd) => wd.type_and_submit(input_id, text).await,
        }
    }

    pub async fn current_url(&self) -> Result<Url, HarnessError> {
        match &self.driver {
            Driver::Http(http) => Ok(http.page()?.url().clone()),
            Driver::WebDriver(wd) => wd.current_url().await,
        }
    }

    /// Status of the last response. WebDriver does not report one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match &self.driver {
            Driver::Http(http) => http.status(),
            Driver::WebDriver(_) => None,
        }
    }

    pub async fn title(&self) -> Result<String, HarnessError> {
        match &self.driver {
            Driver::Http(http) => http
                .page()?
                .title()
                .ok_or_else(|| HarnessError::MissingElement("title".into())),
            Driver::WebDriver(wd) => wd.title().await,
        }
    }

    /// Text of the first `<h1>`.
    pub async fn heading(&self) -> Result<String, HarnessError> {
        match &self.driver {
            Driver::Http(http) => http
                .page()?
                .heading()
                .ok_or_else(|| HarnessError::MissingElement("h1".into())),
            Driver::WebDriver(wd) => wd.heading().await,
        }
    }

    /// Value of attribute `name` on the element with `id`.
    pub async fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, HarnessError> {
        match &self.driver {
            Driver::Http(http) => {
                let page = http.page()?;
                if !page.has_element(id) {
                    return Err(HarnessError::MissingElement(id.to_string()));
                }
                Ok(page.attribute(id, name))
            }
            Driver::WebDriver(wd) => wd.attribute(id, name).await,
        }
    }

    /// Visible text of the page body.
    pub async fn body_text(&self) -> Result<String, HarnessError> {
        match &self.driver {
            Driver::Http(http) => Ok(http.page()?.body_text()),
            Driver::WebDriver(wd) => wd.body_text().await,
        }
    }

    /// Text of each row of the table with `id`.
    pub async fn table_rows(&self, id: &str) -> Result<Vec<String>, HarnessError> {
        match &self.driver {
            Driver::Http(http) => http
                .page()?
                .table_rows(id)
                .ok_or_else(|| HarnessError::MissingElement(id.to_string())),
            Driver::WebDriver(wd) => wd.table_rows(id).await,
        }
    }

    /// Close the session. A WebDriver browser window stays open until this
    /// is called.
    pub async fn quit(self) -> Result<(), HarnessError> {
        match self.driver {
            Driver::Http(_) => Ok(()),
            Driver::WebDriver(wd) => wd.quit().await,
        }
    }
}
