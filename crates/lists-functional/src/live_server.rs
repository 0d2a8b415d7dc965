use lists_db::service::ListService;
use lists_web::{AppState, build_router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::error::HarnessError;

/// Environment variable naming a deployed host (`host[:port]`) to test against.
pub const STAGING_SERVER_ENV: &str = "STAGING_SERVER";

/// The staging host, if one is configured.
#[must_use]
pub fn staging_server() -> Option<String> {
    std::env::var(STAGING_SERVER_ENV)
        .ok()
        .filter(|host| !host.trim().is_empty())
}

/// A server the browser can talk to. A local one stops when dropped.
pub struct LiveServer {
    url: String,
    task: Option<JoinHandle<()>>,
}

impl LiveServer {
    /// Use `STAGING_SERVER` if set, else start a local server.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError` if the local server cannot be started.
    pub async fn start() -> Result<Self, HarnessError> {
        match staging_server() {
            Some(host) => {
                tracing::info!(%host, "functional tests targeting staging server");
                Ok(Self {
                    url: format!("http://{host}"),
                    task: None,
                })
            }
            None => Self::start_local().await,
        }
    }

    /// Start the application on `127.0.0.1:<ephemeral>` with an in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError` if the database or the socket cannot be set up.
    pub async fn start_local() -> Result<Self, HarnessError> {
        let service = ListService::new_local(":memory:").await?;
        let app = build_router(AppState::new(service));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let task = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, app).await {
                tracing::error!(%error, "live server stopped");
            }
        });

        Ok(Self {
            url: format!("http://{addr}"),
            task: Some(task),
        })
    }

    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:53211`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn is_staging(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for LiveServer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::LiveServer;
    use crate::Browser;

    #[tokio::test]
    async fn local_server_serves_home_page() {
        let server = LiveServer::start_local().await.unwrap();
        assert!(!server.is_staging());
        assert!(server.url().starts_with("http://127.0.0.1:"));

        let mut browser = Browser::http().unwrap();
        browser.visit(server.url()).await.unwrap();
        assert_eq!(browser.status(), Some(StatusCode::OK));

        browser.refresh().await.unwrap();
        assert_eq!(browser.current_url().await.unwrap().path(), "/");
        assert_eq!(browser.status(), Some(StatusCode::OK));
    }
}
