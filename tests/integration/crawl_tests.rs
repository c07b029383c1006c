//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test the full
//! crawl-to-sitemap cycle end-to-end through the real HTTP fetcher.

use sitemap_crawler::config::{Config, ExtractorKind, ScopeKind};
use sitemap_crawler::crawler::{crawl, FetchError, PageError};
use sitemap_crawler::sitemap::{write_sitemap, SitemapBuilder};
use sitemap_crawler::SitemapCrawlerError;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with short timeouts
fn create_test_config(max_depth: u32) -> Config {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    config.http.user_agent = "TestBot/1.0".to_string();
    config.http.request_timeout_secs = 1;
    config.http.connect_timeout_secs = 1;
    config
}

/// Mounts an HTML page answering GET requests for `route`
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Index links one page relatively, one absolutely, and one off-site
    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="/page1">Page 1</a>
            <a href="{}/page2">Page 2</a>
            <a href="https://other.example.org/elsewhere">Elsewhere</a>
            <a href="mailto:team@example.com">Mail</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/page1",
        r#"<html><body><a href="./page3">Page 3</a><a href="/">Home</a></body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/page2",
        "<html><body>Content 2</body></html>".to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/page3",
        format!(r#"<html><body><a href="{}/page1">Back</a></body></html>"#, base_url),
    )
    .await;

    let config = create_test_config(3);
    let urls = crawl(&config, &base_url).await.expect("Crawl failed");

    assert_eq!(
        urls,
        vec![
            base_url.clone(),
            format!("{}/page1", base_url),
            format!("{}/page3", base_url),
            format!("{}/", base_url),
            format!("{}/page2", base_url),
        ]
    );

    // Render and persist the sitemap
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("sitemap.xml");
    let document = SitemapBuilder::new()
        .build_from_urls(&urls)
        .expect("Failed to build sitemap");
    write_sitemap(&document, &output).expect("Failed to write sitemap");

    let xml = std::fs::read_to_string(&output).expect("Failed to read sitemap");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert_eq!(xml.matches("<url>").count(), 5);
    assert!(xml.contains(&format!("<loc>{}/page3</loc>", base_url)));
    assert!(!xml.contains("other.example.org"));
}

#[tokio::test]
async fn test_depth_one_fetches_only_origin() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/child">Child</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/child"))
        .respond_with(ResponseTemplate::new(200).set_body_string("child"))
        .expect(0) // Should never be called
        .mount(&mock_server)
        .await;

    let config = create_test_config(1);
    let urls = crawl(&config, &base_url).await.expect("Crawl failed");

    assert_eq!(urls, vec![base_url]);
}

#[tokio::test]
async fn test_error_status_page_is_still_listed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/gone">Gone</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(3);
    let urls = crawl(&config, &base_url).await.expect("Crawl failed");

    assert_eq!(urls, vec![base_url.clone(), format!("{}/gone", base_url)]);
}

#[tokio::test]
async fn test_timeout_deep_in_site_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/a">A</a>"#.to_string()).await;
    mount_page(&mock_server, "/a", r#"<a href="/b">B</a>"#.to_string()).await;

    // Third level answers slower than the 1s request timeout
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(5);
    let err = crawl(&config, &base_url).await.unwrap_err();

    match err {
        SitemapCrawlerError::Crawl(failure) => {
            assert_eq!(failure.url(), format!("{}/b", base_url));
            assert!(matches!(
                failure.cause.cause,
                PageError::Fetch(FetchError::Timeout { .. })
            ));
            assert!(failure.is_transient());
        }
        other => panic!("expected crawl failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_crawl_deadline_from_config() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(2);
    config.http.request_timeout_secs = 30;
    config.crawler.timeout_secs = 1;

    let err = crawl(&config, &base_url).await.unwrap_err();

    match err {
        SitemapCrawlerError::Crawl(failure) => assert!(matches!(
            failure.cause.cause,
            PageError::Fetch(FetchError::DeadlineElapsed { .. })
        )),
        other => panic!("expected crawl failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_origin_fails() {
    // Bind and release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("No local address").port()
    };
    let base_url = format!("http://127.0.0.1:{}", port);

    let config = create_test_config(2);
    let result = crawl(&config, &base_url).await;

    match result {
        Err(SitemapCrawlerError::Crawl(failure)) => {
            assert_eq!(failure.url(), base_url);
            assert!(failure.is_transient());
        }
        other => panic!("expected crawl failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_host_scope_and_html_extractor_from_config() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // A link carrying the origin in its query only passes the substring scope
    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<a href='/single-quoted'>S</a>
               <a href="https://tracker.invalid/?ref={}">T</a>"#,
            base_url
        ),
    )
    .await;

    mount_page(&mock_server, "/single-quoted", String::new()).await;

    let mut config = create_test_config(3);
    config.crawler.scope = ScopeKind::Host;
    config.crawler.extractor = ExtractorKind::Html;

    let urls = crawl(&config, &base_url).await.expect("Crawl failed");

    assert_eq!(
        urls,
        vec![base_url.clone(), format!("{}/single-quoted", base_url)]
    );
}
