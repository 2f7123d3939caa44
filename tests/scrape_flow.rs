//! Integration tests for the scrape-extract-persist sequence
//!
//! These tests use wiremock to serve pages and check the fetcher, extractor
//! and writers end-to-end.

use scrape_calc::config::HttpConfig;
use scrape_calc::headlines::{
    build_http_client, read_csv_records, read_json_records, FetchError, HeadlineRecord,
    HeadlineScraper, SaveOutcome, NO_LINK,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FRONT_PAGE: &str = r#"<html><head><title>News</title></head><body>
    <h1>Daily</h1>
    <h2><a href="/a">First</a></h2>
    <h2>Second</h2>
</body></html>"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;
    mock_server
}

fn expected_records() -> Vec<HeadlineRecord> {
    vec![
        HeadlineRecord::new("First", "/a"),
        HeadlineRecord::new("Second", NO_LINK),
    ]
}

#[tokio::test]
async fn test_fetch_and_extract_headlines() {
    let mock_server = serve(200, FRONT_PAGE).await;
    let client = build_http_client(&HttpConfig::default()).unwrap();

    let mut scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    let document = scraper.fetch(&client).await.expect("page should fetch");
    assert_eq!(scraper.extract(&document), 2);

    assert_eq!(scraper.records(), expected_records().as_slice());
}

#[tokio::test]
async fn test_scrape_to_csv_round_trip() {
    let mock_server = serve(200, FRONT_PAGE).await;
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("data.csv");

    let mut scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    let document = scraper.fetch(&client).await.unwrap();
    scraper.extract(&document);

    assert_eq!(
        scraper.save_to_csv(&csv_path).unwrap(),
        SaveOutcome::Saved(csv_path.clone())
    );
    assert_eq!(read_csv_records(&csv_path).unwrap(), expected_records());
}

#[tokio::test]
async fn test_scrape_to_json_round_trip() {
    let mock_server = serve(200, FRONT_PAGE).await;
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("data.json");

    let mut scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    let document = scraper.fetch(&client).await.unwrap();
    scraper.extract(&document);
    scraper.save_to_json(&json_path).unwrap();

    assert_eq!(read_json_records(&json_path).unwrap(), expected_records());
}

#[tokio::test]
async fn test_page_without_headlines_writes_nothing() {
    let mock_server = serve(200, "<html><body><p>quiet day</p></body></html>").await;
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("data.csv");

    let mut scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    let document = scraper.fetch(&client).await.unwrap();
    assert_eq!(scraper.extract(&document), 0);

    assert_eq!(
        scraper.save_to_csv(&csv_path).unwrap(),
        SaveOutcome::NothingToSave
    );
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_not_found_is_fetch_error() {
    let mock_server = serve(404, "missing").await;
    let client = build_http_client(&HttpConfig::default()).unwrap();

    let scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    let result = scraper.fetch(&client).await;

    match result {
        Err(FetchError::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_server_error_is_fetch_error() {
    let mock_server = serve(503, "busy").await;
    let client = build_http_client(&HttpConfig::default()).unwrap();

    let scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    assert!(scraper.fetch(&client).await.is_err());
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let scraper = HeadlineScraper::new(url);
    assert!(matches!(
        scraper.fetch(&client).await,
        Err(FetchError::Transport(_))
    ));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(wiremock::matchers::header("user-agent", "HeadlineBot/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FRONT_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpConfig {
        user_agent: Some("HeadlineBot/2.0".to_string()),
        timeout_secs: Some(10),
    };
    let client = build_http_client(&config).unwrap();
    let scraper = HeadlineScraper::new(format!("{}/", mock_server.uri()));
    assert!(scraper.fetch(&client).await.is_ok());
}
