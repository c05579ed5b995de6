//! Integration tests for the EDGAR client.
//!
//! All tests drive [`EdgarClient`] through a routing transport double; no
//! network access, paused tokio clock throughout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secwire_core::{ErrorKind, TickerEntry};
use secwire_edgar::{EdgarClient, EdgarError};
use secwire_fetch::{ClientConfig, FetchError, Transport, TransportResponse};
use url::Url;

// ============================================================================
// Transport double
// ============================================================================

type Responder = Box<dyn Fn(&str, usize) -> Result<TransportResponse, FetchError> + Send + Sync>;

/// Routes requests through a closure and records every requested URL.
///
/// The closure receives the URL and the zero-based call index.
struct MockTransport {
    respond: Responder,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    fn new(
        respond: impl Fn(&str, usize) -> Result<TransportResponse, FetchError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn requested_urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(url.to_string());
            calls.len() - 1
        };
        (self.respond)(url.as_str(), index)
    }
}

fn client_over(transport: Arc<MockTransport>) -> EdgarClient {
    let config = ClientConfig::from_user_agent("secwire-tests test@example.com")
        .unwrap()
        .with_requests_per_second(0);
    EdgarClient::with_transport(&config, transport)
}

// ============================================================================
// Fixtures
// ============================================================================

/// Directory body with AAPL, MSFT, and `extra` synthetic rows.
fn ticker_directory_body(extra: usize) -> String {
    let mut rows = vec![
        r#""0":{"cik_str":320193,"ticker":"AAPL","title":"Apple Inc."}"#.to_string(),
        r#""1":{"cik_str":789019,"ticker":"MSFT","title":"Microsoft Corp"}"#.to_string(),
    ];
    for i in 0..extra {
        rows.push(format!(
            r#""{}":{{"cik_str":{},"ticker":"ZZ{i:04}","title":"Synthetic Co {i}"}}"#,
            i + 2,
            1_000_000 + i,
        ));
    }
    format!("{{{}}}", rows.join(","))
}

const FACTS_BODY: &str = r#"{
    "cik": 320193,
    "entityName": "Apple Inc.",
    "facts": {
        "dei": {
            "EntityCommonStockSharesOutstanding": {
                "label": "Entity Common Stock, Shares Outstanding",
                "description": "Indicate number of shares outstanding.",
                "units": {
                    "shares": [
                        {
                            "end": "2023-10-20",
                            "val": 15552752000,
                            "accn": "0000320193-23-000106",
                            "fy": 2023,
                            "fp": "FY",
                            "form": "10-K",
                            "filed": "2023-11-03"
                        }
                    ]
                }
            }
        }
    }
}"#;

const SUBMISSIONS_BODY: &str = r#"{
    "cik": "0000320193",
    "name": "Apple Inc.",
    "entityType": "operating",
    "tickers": ["AAPL"],
    "exchanges": ["Nasdaq"],
    "filings": {
        "recent": {
            "accessionNumber": ["0000320193-23-000106", "0000320193-23-000077"],
            "filingDate": ["2023-11-03", "2023-08-04"],
            "form": ["10-K", "10-Q"],
            "primaryDocument": ["aapl-20230930.htm", "aapl-20230701.htm"]
        },
        "files": []
    }
}"#;

/// Submissions body whose parallel arrays disagree on length.
const BROKEN_SUBMISSIONS_BODY: &str = r#"{
    "cik": "0000320193",
    "name": "Apple Inc.",
    "filings": {
        "recent": {
            "accessionNumber": ["0000320193-23-000106", "0000320193-23-000077"],
            "filingDate": ["2023-11-03"],
            "form": ["10-K", "10-Q"],
            "primaryDocument": ["aapl-20230930.htm", "aapl-20230701.htm"]
        },
        "files": []
    }
}"#;

fn ok(body: impl Into<Vec<u8>>) -> Result<TransportResponse, FetchError> {
    Ok(TransportResponse::new(200, body))
}

// ============================================================================
// Ticker directory
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_ticker_lookup_is_case_insensitive_and_cached() {
    let body = ticker_directory_body(0);
    let transport = MockTransport::new(move |_, _| ok(body.clone()));
    let client = client_over(transport.clone());

    assert_eq!(client.lookup_ticker("AAPL").await.unwrap(), "0000320193");
    assert_eq!(client.lookup_ticker("aapl").await.unwrap(), "0000320193");
    assert_eq!(client.lookup_ticker("Msft").await.unwrap(), "0000789019");

    // Three lookups, one directory fetch.
    assert_eq!(transport.call_count(), 1);
    assert_eq!(
        transport.requested_urls(),
        vec!["https://www.sec.gov/files/company_tickers.json"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_unknown_ticker_is_a_validation_error() {
    let body = ticker_directory_body(0);
    let transport = MockTransport::new(move |_, _| ok(body.clone()));
    let client = client_over(transport);

    let err = client.lookup_ticker("NOTREAL").await.unwrap_err();

    assert!(matches!(err, EdgarError::TickerNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("NOTREAL"));
}

#[tokio::test(start_paused = true)]
async fn test_get_all_tickers_returns_full_directory() {
    let body = ticker_directory_body(5500);
    let transport = MockTransport::new(move |_, _| ok(body.clone()));
    let client = client_over(transport);

    let entries = client.get_all_tickers().await.unwrap();

    assert!(entries.len() > 5000);
    assert!(entries.contains(&TickerEntry::new("AAPL", "0000320193")));

    // Sorted by ticker.
    for pair in entries.windows(2) {
        assert!(pair[0].ticker < pair[1].ticker);
    }
}

#[tokio::test(start_paused = true)]
async fn test_directory_load_failure_is_network_error_and_not_cached() {
    let healthy = Arc::new(AtomicBool::new(false));
    let body = ticker_directory_body(0);

    let flag = Arc::clone(&healthy);
    let transport = MockTransport::new(move |_, _| {
        if flag.load(Ordering::SeqCst) {
            ok(body.clone())
        } else {
            Err(FetchError::Connection("connection reset".into()))
        }
    });
    let client = client_over(transport.clone());

    // Load fails: surfaces as a network error, never "ticker not found".
    let err = client.lookup_ticker("AAPL").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(!matches!(err, EdgarError::TickerNotFound(_)));
    // The retry budget was spent on the transient failure.
    assert_eq!(transport.call_count(), 3);

    // The failed load was not cached: once the network recovers, the next
    // lookup fetches and succeeds.
    healthy.store(true, Ordering::SeqCst);
    assert_eq!(client.lookup_ticker("AAPL").await.unwrap(), "0000320193");
    assert_eq!(transport.call_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_first_lookups_share_one_fetch() {
    let body = ticker_directory_body(0);
    let transport = MockTransport::new(move |_, _| ok(body.clone()));
    let client = Arc::new(client_over(transport.clone()));

    let lookups = (0..8).map(|_| {
        let client = Arc::clone(&client);
        async move { client.lookup_ticker("AAPL").await.unwrap() }
    });
    let results = futures::future::join_all(lookups).await;

    assert!(results.iter().all(|cik| cik == "0000320193"));
    assert_eq!(transport.call_count(), 1);
}

// ============================================================================
// Company facts and filings
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_get_company_facts_normalizes_identifier() {
    let transport = MockTransport::new(|url, _| {
        assert_eq!(
            url,
            "https://data.sec.gov/api/xbrl/companyfacts/CIK0000320193.json"
        );
        ok(FACTS_BODY)
    });
    let client = client_over(transport.clone());

    let facts = client.get_company_facts("320193").await.unwrap();

    assert_eq!(facts.cik, 320193);
    assert_eq!(facts.entity_name, "Apple Inc.");
    assert!(facts.taxonomy("dei").is_some());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_get_company_filings_returns_validated_payload() {
    let transport = MockTransport::new(|url, _| {
        assert_eq!(url, "https://data.sec.gov/submissions/CIK0000320193.json");
        ok(SUBMISSIONS_BODY)
    });
    let client = client_over(transport);

    let submissions = client.get_company_filings("CIK0000320193").await.unwrap();

    assert_eq!(submissions.cik, "0000320193");
    assert_eq!(submissions.name, "Apple Inc.");
    assert_eq!(submissions.filings.recent.len(), 2);

    let filings = submissions.recent_filings().unwrap();
    assert_eq!(filings[0].form, "10-K");
    assert_eq!(filings[1].primary_document, "aapl-20230701.htm");
}

#[tokio::test(start_paused = true)]
async fn test_inconsistent_parallel_arrays_are_rejected() {
    let transport = MockTransport::new(|_, _| ok(BROKEN_SUBMISSIONS_BODY));
    let client = client_over(transport);

    let err = client.get_company_filings("320193").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("filingDate"));
}

#[tokio::test(start_paused = true)]
async fn test_malformed_identifier_never_reaches_transport() {
    let transport = MockTransport::new(|_, _| ok("{}"));
    let client = client_over(transport.clone());

    let err = client.get_company_facts("AAPL").await.unwrap_err();
    assert!(matches!(err, EdgarError::InvalidCik(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = client.get_company_filings("12345678901").await.unwrap_err();
    assert!(matches!(err, EdgarError::InvalidCik(_)));

    assert_eq!(transport.call_count(), 0);
}

// ============================================================================
// Filing documents and classification
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_fetch_filing_document_builds_archive_url() {
    let transport = MockTransport::new(|url, _| {
        assert_eq!(
            url,
            "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/aapl-20230930.htm"
        );
        ok("<html><title>10-K</title><body>FORM 10-K</body></html>")
    });
    let client = client_over(transport);

    let body = client
        .fetch_filing_document("320193", "0000320193-23-000106", "aapl-20230930.htm")
        .await
        .unwrap();

    let doc = client.parse_document(&body).unwrap();
    assert_eq!(doc.form_type, "10-K");
    assert_eq!(doc.title.as_deref(), Some("10-K"));
}

#[tokio::test(start_paused = true)]
async fn test_disallowed_url_fails_before_transport() {
    let transport = MockTransport::new(|_, _| ok("never served"));
    let client = client_over(transport.clone());

    let err = client.fetch_text("https://example.com/x").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(transport.call_count(), 0);
}
