//! End-to-end pipeline tests: CrossRef fetch, resolution, CSV export.

use serde_json::json;
use wiremock::matchers::{method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

use replication_scout::config::Config;
use replication_scout::{export, HttpContext, Pipeline};

fn setup(mock_server: &MockServer) -> Pipeline {
    let config = Config::for_testing(&mock_server.uri());
    let http = HttpContext::new(&config).unwrap();
    Pipeline::new(&config, &http)
}

fn works(items: Vec<serde_json::Value>) -> serde_json::Value {
    json!({"message": {"items": items}})
}

#[tokio::test]
async fn test_direct_url_scan_mode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crossref/works"))
        .and(query_param_contains("filter", "issn:0002-8282"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works(vec![
            json!({
                "title": ["Credit Cycles"],
                "author": [{"given": "Jane", "family": "Smith"}],
                "DOI": "10.1257/aer.1",
                "abstract": "Replication files at https://github.com/example/credit-cycles today.",
                "container-title": ["American Economic Review"],
                "published-print": {"date-parts": [[2023, 4, 2]]}
            }),
            json!({
                "title": ["Plain Paper"],
                "DOI": "10.1257/aer.2",
                "abstract": "No links here.",
                "container-title": ["American Economic Review"],
                "published-print": {"date-parts": [[2022]]}
            }),
        ])))
        .mount(&mock_server)
        .await;

    let pipeline = setup(&mock_server);
    let results = pipeline
        .run(&[("American Economic Review", "0002-8282")], 2022, 2024, 10, false)
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].outcome.url(),
        Some("https://github.com/example/credit-cycles")
    );
    assert!(!results[1].outcome.is_found());

    // With external lookups off, only the metadata source was contacted.
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() == "/crossref/works"));
}

#[tokio::test]
async fn test_external_resolution_accepts_zenodo_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crossref/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works(vec![json!({
            "title": ["Credit Cycles in Emerging Markets"],
            "author": [{"given": "Jane", "family": "Smith"}],
            "DOI": "10.1111/ecta.1",
            "abstract": "We study credit.",
            "container-title": ["Econometrica"],
            "published-print": {"date-parts": [[2023]]}
        })])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/zenodo/api/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"hits": [{
                "id": 5,
                "metadata": {
                    "title": "Replication data for: Credit Cycles in Emerging Markets",
                    "description": "Data and code",
                    "related_identifiers": [{"identifier": "10.1111/ecta.1"}]
                }
            }]}
        })))
        .mount(&mock_server)
        .await;

    let pipeline = setup(&mock_server);
    let results = pipeline.run(&[("Econometrica", "0012-9682")], 2022, 2024, 10, true).await;

    assert_eq!(results.len(), 1);
    assert!(results[0].outcome.url().unwrap().ends_with("/zenodo/record/5"));
}

#[tokio::test]
async fn test_failed_journal_fetch_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crossref/works"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let pipeline = setup(&mock_server);
    let results = pipeline
        .run(&[("American Economic Review", "0002-8282")], 2022, 2024, 10, false)
        .await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_results_export_to_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crossref/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works(vec![json!({
            "title": ["Credit, Crisis, and Recovery"],
            "author": [{"given": "Jane", "family": "Smith"}],
            "DOI": "10.1257/aer.1",
            "abstract": "Data at https://zenodo.org/record/9.",
            "container-title": ["American Economic Review"],
            "published-print": {"date-parts": [[2023, 4]]}
        })])))
        .mount(&mock_server)
        .await;

    let pipeline = setup(&mock_server);
    let results = pipeline
        .run(&[("American Economic Review", "0002-8282")], 2022, 2024, 10, false)
        .await;

    let csv = export::to_csv(&results);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("title,authors,journal"));
    assert!(lines[1].starts_with("\"Credit, Crisis, and Recovery\",Jane Smith"));
    assert!(lines[1].contains("2023-04-01"));
    assert!(lines[1].contains(",1,https://zenodo.org/record/9"));
}
