use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use scraper::ElementRef;
use tracing::debug;

use crate::config::AppConfig;

pub fn http_client(config: &AppConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .context("unable to build http client")
}

pub fn fetch_html(client: &Client, url: &str) -> Result<String> {
    debug!(url, "fetching listing");
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request failed for {url}"))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("non-success status for {url}"))?;
    let body = response
        .text()
        .with_context(|| format!("unable to read response body for {url}"))?;
    debug!(url, bytes = body.len(), "fetched listing");
    Ok(body)
}

/// Text of the element's first child, if that child is a text node.
pub fn first_text_child(element: &ElementRef<'_>) -> Option<String> {
    let child = element.first_child()?;
    child.value().as_text().map(|text| {
        let text: &str = text;
        text.to_string()
    })
}

pub fn next_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

pub fn has_attr_value(element: &ElementRef<'_>, value: &str) -> bool {
    element.value().attrs().any(|(_, attr)| attr == value)
}
