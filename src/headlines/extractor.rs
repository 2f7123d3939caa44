//! Headline extraction
//!
//! Walks a parsed document for `<h2>` elements and turns each one into a
//! [`HeadlineRecord`]. The records accumulate on the owning
//! [`HeadlineScraper`] in document order.

use crate::headlines::fetcher::{fetch_document, FetchError};
use crate::headlines::writer::{write_csv, write_json, SaveOutcome, WriteError};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder link for headlines without a nested anchor
pub const NO_LINK: &str = "No link";

/// A scraped headline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Trimmed text content of the heading
    pub title: String,

    /// `href` of the first nested anchor, or [`NO_LINK`]
    pub link: String,
}

impl HeadlineRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Scrapes headlines from one page and keeps what it found
#[derive(Debug, Clone)]
pub struct HeadlineScraper {
    url: String,
    records: Vec<HeadlineRecord>,
}

impl HeadlineScraper {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            records: Vec::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Records extracted so far, in document order
    pub fn records(&self) -> &[HeadlineRecord] {
        &self.records
    }

    /// Fetches and parses the target page
    pub async fn fetch(&self, client: &Client) -> Result<Html, FetchError> {
        fetch_document(client, &self.url).await
    }

    /// Appends every headline in `document` and returns how many were added
    pub fn extract(&mut self, document: &Html) -> usize {
        let found = extract_headlines(document);
        let count = found.len();
        self.records.extend(found);
        tracing::debug!("Extracted {} headlines from {}", count, self.url);
        count
    }

    /// Writes the records as CSV
    pub fn save_to_csv(&self, path: &Path) -> Result<SaveOutcome, WriteError> {
        write_csv(&self.records, path)
    }

    /// Writes the records as JSON
    pub fn save_to_json(&self, path: &Path) -> Result<SaveOutcome, WriteError> {
        write_json(&self.records, path)
    }
}

/// Extracts `(title, link)` pairs from every `<h2>` in the document
///
/// # Example
///
/// ```
/// use scrape_calc::headlines::extract_headlines;
/// use scraper::Html;
///
/// let document = Html::parse_document(r#"<h2><a href="/a">First</a></h2><h2>Second</h2>"#);
/// let records = extract_headlines(&document);
/// assert_eq!(records[0].link, "/a");
/// assert_eq!(records[1].link, "No link");
/// ```
pub fn extract_headlines(document: &Html) -> Vec<HeadlineRecord> {
    let mut records = Vec::new();

    let (Ok(heading_selector), Ok(link_selector)) =
        (Selector::parse("h2"), Selector::parse("a[href]"))
    else {
        return records;
    };

    for heading in document.select(&heading_selector) {
        let title = heading.text().collect::<String>().trim().to_string();
        let link = heading
            .select(&link_selector)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .unwrap_or(NO_LINK)
            .to_string();

        records.push(HeadlineRecord { title, link });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_linked_and_unlinked_headlines() {
        let html = r#"
            <html><body>
                <h2><a href="/a">First</a></h2>
                <h2>Second</h2>
            </body></html>
        "#;
        let records = extract_headlines(&parse(html));
        assert_eq!(
            records,
            vec![
                HeadlineRecord::new("First", "/a"),
                HeadlineRecord::new("Second", NO_LINK),
            ]
        );
    }

    #[test]
    fn test_title_is_trimmed_and_concatenated() {
        let html = "<h2>\n   Breaking: <span>big</span> news  \n</h2>";
        let records = extract_headlines(&parse(html));
        assert_eq!(records[0].title, "Breaking: big news");
    }

    #[test]
    fn test_link_is_not_resolved() {
        let html = r#"<h2><a href="story.html?id=3">Story</a></h2>"#;
        let records = extract_headlines(&parse(html));
        assert_eq!(records[0].link, "story.html?id=3");
    }

    #[test]
    fn test_first_link_wins() {
        let html = r#"<h2><a href="/one">One</a> <a href="/two">Two</a></h2>"#;
        let records = extract_headlines(&parse(html));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].link, "/one");
        assert_eq!(records[0].title, "One Two");
    }

    #[test]
    fn test_anchor_without_href_is_no_link() {
        let html = r#"<h2><a name="top">Anchor</a></h2>"#;
        let records = extract_headlines(&parse(html));
        assert_eq!(records[0].link, NO_LINK);
    }

    #[test]
    fn test_other_headings_ignored() {
        let html = "<h1>Site</h1><h3>Sub</h3><p>Body</p>";
        assert!(extract_headlines(&parse(html)).is_empty());
    }

    #[test]
    fn test_document_order() {
        let html = "<div><h2>A</h2><section><h2>B</h2></section></div><h2>C</h2>";
        let titles: Vec<String> = extract_headlines(&parse(html))
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_scraper_accumulates_records() {
        let mut scraper = HeadlineScraper::new("https://example.com/");
        let document = parse("<h2>Only</h2>");

        assert_eq!(scraper.extract(&document), 1);
        assert_eq!(scraper.extract(&document), 1);
        assert_eq!(scraper.records().len(), 2);
        assert_eq!(scraper.url(), "https://example.com/");
    }
}
