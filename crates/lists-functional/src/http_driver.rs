//! Fallback driver: a plain HTTP client that submits forms the way a
//! browser would and keeps the last response as a [`Page`].

use reqwest::{StatusCode, Url};

use crate::error::HarnessError;
use crate::page::Page;

/// Each driver owns its own client with no cookie store, so two sessions
/// never share anything.
pub struct HttpDriver {
    client: reqwest::Client,
    page: Option<Page>,
}

impl HttpDriver {
    pub fn new() -> Result<Self, HarnessError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client, page: None })
    }

    pub async fn visit(&mut self, url: Url) -> Result<(), HarnessError> {
        let response = self.client.get(url).send().await?;
        self.load(response).await
    }

    pub async fn refresh(&mut self) -> Result<(), HarnessError> {
        let url = self.page()?.url().clone();
        self.visit(url).await
    }

    /// Submit the form that contains `input_id`, with the input's `name` as
    /// the field name, and follow any redirect.
    pub async fn type_and_submit(&mut self, input_id: &str, text: &str) -> Result<(), HarnessError> {
        let page = self.page()?;
        let name = page
            .attribute(input_id, "name")
            .ok_or_else(|| HarnessError::MissingElement(input_id.to_string()))?;
        let action = page
            .form_action_for(input_id)
            .ok_or_else(|| HarnessError::MissingElement(format!("form around {input_id}")))?;
        let target = page
            .url()
            .join(&action)
            .map_err(|e| HarnessError::InvalidUrl(format!("{action}: {e}")))?;

        tracing::debug!(%target, "submitting form");
        let response = self
            .client
            .post(target)
            .form(&[(name.as_str(), text)])
            .send()
            .await?;
        self.load(response).await
    }

    /// The last page loaded.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::NoPage` before the first navigation.
    pub fn page(&self) -> Result<&Page, HarnessError> {
        self.page.as_ref().ok_or(HarnessError::NoPage)
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.page.as_ref().map(Page::status)
    }

    async fn load(&mut self, response: reqwest::Response) -> Result<(), HarnessError> {
        let url = response.url().clone();
        let status = response.status();
        let html = response.text().await?;
        self.page = Some(Page::new(url, status, html));
        Ok(())
    }
}
