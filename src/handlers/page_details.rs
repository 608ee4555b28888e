use reqwest::{Client as ReqwestClient, StatusCode};
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::PageDetails;

pub const FAVICON_PROXY: &str = "https://icon.horse/icon/";

const FETCH_FAILED: &str = "The page could not be fetched";

// ── Public helpers ─────────────────────────────────────────────────────────

/// Favicon proxy URL for the host of `page_url`, port stripped.
pub fn favicon_url(page_url: &Url) -> Option<String> {
    page_url
        .host_str()
        .map(|host| format!("{FAVICON_PROXY}{host}"))
}

/// Pull the title and Open Graph image out of `html`.
/// Missing tags leave the corresponding field empty.
pub fn extract_page_details(html: &str, page_url: &Url, raw_url: &str) -> PageDetails {
    let document = Html::parse_document(html);

    PageDetails {
        title: get_title_tag(&document).unwrap_or_default(),
        image: get_meta_property(&document, "og:image").unwrap_or_default(),
        favicon: favicon_url(page_url).unwrap_or_default(),
        url: raw_url.to_string(),
    }
}

fn get_meta_property(doc: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.to_string())
}

fn get_title_tag(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

// ── Fetch ──────────────────────────────────────────────────────────────────

/// GET `raw_url` and scrape it. Anything but a 200 is an error.
pub async fn get_page_details(client: &ReqwestClient, raw_url: &str) -> AppResult<PageDetails> {
    let page_url = Url::parse(raw_url).map_err(|e| {
        tracing::warn!(error = %e, url = %raw_url, "Target URL is not valid");
        AppError::PageFetch(FETCH_FAILED.into())
    })?;

    let response = client.get(page_url.clone()).send().await.map_err(|e| {
        tracing::warn!(error = ?e, url = %raw_url, "Failed to fetch target page");
        AppError::PageFetch(FETCH_FAILED.into())
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!(status = %status, url = %raw_url, "Target page returned non-200 status");
        return Err(AppError::PageFetch(format!(
            "The page returned a {} error",
            status.as_u16()
        )));
    }

    let html = response.text().await.map_err(|e| {
        tracing::warn!(error = ?e, url = %raw_url, "Failed to read target page body");
        AppError::HtmlParse("The page body could not be read".into())
    })?;

    Ok(extract_page_details(&html, &page_url, raw_url))
}

// ── Unit tests ─────────────────────────────────────────────────────────────
