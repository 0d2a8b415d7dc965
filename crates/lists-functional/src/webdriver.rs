//! Driver for a real browser behind a WebDriver server (geckodriver,
//! chromedriver, Selenium).

use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use reqwest::Url;

use crate::error::HarnessError;

/// The WebDriver code point for the Enter key.
const ENTER: char = '\u{e007}';

pub struct WebDriver {
    client: Client,
}

impl WebDriver {
    /// Start a new browser session on the WebDriver server at `url`.
    pub async fn connect(url: &str) -> Result<Self, HarnessError> {
        let client = ClientBuilder::native().connect(url).await?;
        tracing::debug!(webdriver = url, "browser session started");
        Ok(Self { client })
    }

    pub async fn visit(&self, url: &Url) -> Result<(), HarnessError> {
        Ok(self.client.goto(url.as_str()).await?)
    }

    pub async fn refresh(&self) -> Result<(), HarnessError> {
        Ok(self.client.refresh().await?)
    }

    /// Type into the input and press Enter. The browser submits the owning
    /// form; the resulting page may still be loading when this returns.
    pub async fn type_and_submit(&self, input_id: &str, text: &str) -> Result<(), HarnessError> {
        let input = self.find_by_id(input_id).await?;
        input.send_keys(&format!("{text}{ENTER}")).await?;
        Ok(())
    }

    pub async fn current_url(&self) -> Result<Url, HarnessError> {
        Ok(self.client.current_url().await?)
    }

    pub async fn title(&self) -> Result<String, HarnessError> {
        Ok(self.client.title().await?)
    }

    pub async fn heading(&self) -> Result<String, HarnessError> {
        let h1 = self.find(Locator::Css("h1"), "h1").await?;
        Ok(h1.text().await?)
    }

    pub async fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, HarnessError> {
        let element = self.find_by_id(id).await?;
        Ok(element.attr(name).await?)
    }

    pub async fn body_text(&self) -> Result<String, HarnessError> {
        let body = self.find(Locator::Css("body"), "body").await?;
        Ok(body.text().await?)
    }

    pub async fn table_rows(&self, id: &str) -> Result<Vec<String>, HarnessError> {
        let table = self.find_by_id(id).await?;
        let mut rows = Vec::new();
        for row in table.find_all(Locator::Css("tr")).await? {
            rows.push(row.text().await?);
        }
        Ok(rows)
    }

    /// End the browser session.
    pub async fn quit(self) -> Result<(), HarnessError> {
        Ok(self.client.close().await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Element, HarnessError> {
        self.find(Locator::Id(id), id).await
    }

    async fn find(&self, locator: Locator<'_>, what: &str) -> Result<Element, HarnessError> {
        self.client.find(locator).await.map_err(|e| match e {
            e if e.is_no_such_element() => HarnessError::MissingElement(what.to_string()),
            other => HarnessError::WebDriver(other),
        })
    }
}
