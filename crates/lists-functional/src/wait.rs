//! Bounded polling for page state that may not be there yet.

use std::time::{Duration, Instant};

use lists_web::templates::LIST_TABLE_ID;

use crate::browser::Browser;
use crate::error::HarnessError;

/// How long to keep polling before giving up.
pub const MAX_WAIT: Duration = Duration::from_secs(10);

pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Poll until `row_text` is one of the rows of the list table.
///
/// # Errors
///
/// After [`MAX_WAIT`], returns the last failure unchanged: a missing table,
/// a missing row, or a driver error.
pub async fn wait_for_row_in_list_table(
    browser: &Browser,
    row_text: &str,
) -> Result<(), HarnessError> {
    wait_for(browser, MAX_WAIT, POLL_INTERVAL, async |browser: &Browser| {
        let rows = browser.table_rows(LIST_TABLE_ID).await?;
        if rows.iter().any(|row| row == row_text) {
            Ok(())
        } else {
            Err(HarnessError::RowMissing {
                row: row_text.to_string(),
                rows,
            })
        }
    })
    .await
}

/// Poll until the page body contains `text`.
///
/// # Errors
///
/// After [`MAX_WAIT`], returns the last failure unchanged.
pub async fn wait_for_text(browser: &Browser, text: &str) -> Result<(), HarnessError> {
    wait_for(browser, MAX_WAIT, POLL_INTERVAL, async |browser: &Browser| {
        if browser.body_text().await?.contains(text) {
            Ok(())
        } else {
            Err(HarnessError::TextMissing(text.to_string()))
        }
    })
    .await
}

/// Re-run `check` against the page the browser is showing until it passes
/// or `max_wait` has elapsed.
///
/// # Errors
///
/// Returns the error from the last attempt once `max_wait` is exceeded.
pub async fn wait_for<F>(
    browser: &Browser,
    max_wait: Duration,
    interval: Duration,
    check: F,
) -> Result<(), HarnessError>
where
    F: AsyncFn(&Browser) -> Result<(), HarnessError>,
{
    let start = Instant::now();
    loop {
        match check(browser).await {
            Ok(()) => return Ok(()),
            Err(error) if start.elapsed() > max_wait => return Err(error),
            Err(error) => tracing::trace!(%error, "check failed, retrying"),
        }
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn gives_up_after_max_wait() {
        let browser = Browser::http().unwrap();
        let max_wait = Duration::from_millis(300);
        let start = Instant::now();

        let result = wait_for_with_rows(&browser, max_wait).await;

        assert!(matches!(result, Err(HarnessError::NoPage)));
        assert!(start.elapsed() >= max_wait);
    }

    async fn wait_for_with_rows(browser: &Browser, max_wait: Duration) -> Result<(), HarnessError> {
        wait_for(browser, max_wait, Duration::from_millis(50), async |browser: &Browser| {
            browser.table_rows(LIST_TABLE_ID).await.map(drop)
        })
        .await
    }

    #[tokio::test]
    async fn returns_error_from_final_attempt() {
        let browser = Browser::http().unwrap();
        let attempts = Cell::new(0);

        let err = wait_for(
            &browser,
            Duration::from_millis(150),
            Duration::from_millis(20),
            async |_: &Browser| {
                attempts.set(attempts.get() + 1);
                Err(HarnessError::MissingElement(format!("attempt {}", attempts.get())))
            },
        )
        .await
        .unwrap_err();

        assert!(attempts.get() > 1);
        assert_eq!(err.to_string(), format!("no element 'attempt {}' on the page", attempts.get()));
    }

    #[tokio::test]
    async fn passes_once_check_succeeds() {
        let browser = Browser::http().unwrap();
        let attempts = Cell::new(0);

        wait_for(&browser, MAX_WAIT, Duration::from_millis(10), async |_: &Browser| {
            attempts.set(attempts.get() + 1);
            if attempts.get() < 3 {
                Err(HarnessError::NoPage)
            } else {
                Ok(())
            }
        })
        .await
        .unwrap();

        assert_eq!(attempts.get(), 3);
    }
}
