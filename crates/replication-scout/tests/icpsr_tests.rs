//! Mock-based tests for the openICPSR adapter.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use replication_scout::config::Config;
use replication_scout::models::{PaperQuery, SourceKind};
use replication_scout::sources::{IcpsrSource, SearchTerms, SourceAdapter};
use replication_scout::HttpContext;

fn setup(mock_server: &MockServer) -> IcpsrSource {
    let config = Config::for_testing(&mock_server.uri());
    let http = HttpContext::new(&config).unwrap();
    IcpsrSource::new(&config, http)
}

fn paper(title: &str) -> PaperQuery {
    PaperQuery {
        title: title.to_string(),
        venue: "American Economic Review".to_string(),
        ..PaperQuery::default()
    }
}

#[tokio::test]
async fn test_parses_study_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/icpsr/search/studies"))
        .and(query_param("q", "credit cycles emerging markets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <div class="search-result">
              <a class="title" href="/openicpsr/project/199265/version/V1/view">
                Credit Cycles in Emerging Markets
              </a>
              <p class="abstract">Data and code for the paper.</p>
            </div>
            <div class="search-result">
              <a class="title" href="/openicpsr/project/100001/version/V2/view">Unrelated Study</a>
            </div>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let source = setup(&mock_server);
    let query = paper("Credit Cycles in Emerging Markets");
    let candidates = source.search(&SearchTerms::from_query(&query)).await;

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].source, SourceKind::Icpsr);
    assert_eq!(candidates[0].title, "Credit Cycles in Emerging Markets");
    assert!(candidates[0].identifier.ends_with("/openicpsr/project/199265/version/V1/view"));
    assert_eq!(candidates[0].metadata.as_deref(), Some("Data and code for the paper."));
    assert_eq!(candidates[1].metadata, None);
}

#[tokio::test]
async fn test_identifier_is_ignored() {
    let mock_server = MockServer::start().await;

    // The DOI never reaches the archive; only the title terms do.
    Mock::given(method("GET"))
        .and(path("/icpsr/search/studies"))
        .and(query_param("q", "credit cycles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = setup(&mock_server);
    let query = PaperQuery {
        doi: Some("10.1257/aer.1".to_string()),
        title: "Credit Cycles".to_string(),
        venue: "American Economic Review".to_string(),
        ..PaperQuery::default()
    };

    assert!(source.search(&SearchTerms::from_query(&query)).await.is_empty());
}

#[tokio::test]
async fn test_empty_result_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/icpsr/search/studies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>No results</body></html>"))
        .mount(&mock_server)
        .await;

    let source = setup(&mock_server);
    let query = paper("Credit Cycles");

    assert!(source.search(&SearchTerms::from_query(&query)).await.is_empty());
}

#[tokio::test]
async fn test_server_error_absorbed_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/icpsr/search/studies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let source = setup(&mock_server);
    let query = paper("Credit Cycles");

    assert!(source.search(&SearchTerms::from_query(&query)).await.is_empty());
}
