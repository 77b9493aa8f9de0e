use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

const REQUEST_TIMEOUT_SECS: u64 = 20;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Download the calendar feed. Non-2xx responses are errors carrying the status.
pub fn fetch_feed(url: &str) -> Result<String> {
    let client = http_client()?;
    let resp = client
        .get(url)
        .header(USER_AGENT, concat!("lfc_fixtures/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "text/calendar, text/plain;q=0.9, */*;q=0.5")
        .send()
        .context("feed request failed")?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("failed to fetch ICS: http {status}"));
    }
    resp.text().context("failed reading feed body")
}
