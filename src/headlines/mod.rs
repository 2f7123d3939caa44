//! Headline scraping
//!
//! This module contains the scrape-extract-persist sequence:
//! - Fetching one page over HTTP
//! - Extracting `<h2>` headlines and their links
//! - Writing the results to CSV or JSON

mod csv;
mod extractor;
mod fetcher;
mod writer;

pub use extractor::{extract_headlines, HeadlineRecord, HeadlineScraper, NO_LINK};
pub use fetcher::{build_http_client, fetch_document, fetch_page, FetchError};
pub use writer::{
    read_csv_records, read_json_records, write_csv, write_json, SaveOutcome, WriteError,
};
