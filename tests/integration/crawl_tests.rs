//! Integration tests for the crawler
//!
//! These tests use wiremock to serve listing and detail pages and check the
//! JSON files a full crawl leaves behind.

use movie_crawler::config::{Category, Config};
use movie_crawler::crawler::Coordinator;
use movie_crawler::output::CategoryOutcome;
use movie_crawler::Movie;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration against the mock server
fn create_test_config(host: &str, output_dir: &Path, categories: Vec<Category>) -> Config {
    let mut config = Config::default();
    config.crawler.host = host.to_string();
    config.output.directory = output_dir.display().to_string();
    config.categories = categories;
    config
}

fn listing_page(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|href| format!(r#"<li><a href="{}">film</a></li>"#, href))
        .collect();
    format!(
        r#"<html><body><ul class="filmListAll">{}</ul></body></html>"#,
        items
    )
}

fn detail_page(title: &str, runtime: u32) -> String {
    format!(
        r#"<html><body>
<div class="filmTitle">
  {title}
</div>
<div id="filmTagBlock">
  <span class="rate"></span>
  <a class="Poster" href="/p/"><img src="/poster/{title}.jpg"></a>
  <span>
    {title} synopsis<em>（普遍級）</em>
  </span>
  <ul class="runtime">
    <li>片長：{runtime}分</li>
    <li>上映日期：2024/05/01</li>
  </ul>
</div>
<div class="video_view"><iframe class="image featured" src="https://www.youtube.com/embed/{title}"></iframe></div>
<div>one</div>
<div>two</div>
<div>劇情簡介
  {title} plot.
</div>
</body></html>"#
    )
}

async fn mount_page(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn read_movies(path: &Path) -> Vec<Movie> {
    let data = std::fs::read(path).expect("Failed to read output");
    serde_json::from_slice(&data).expect("Output is not a movie array")
}

#[tokio::test]
async fn test_full_crawl_single_category() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    mount_page(&mock_server, "/movie/now/0", listing_page(&["/movie/a/", "/movie/b/", "/movie/c/"])).await;
    mount_page(&mock_server, "/movie/a/", detail_page("alpha", 101)).await;
    mount_page(&mock_server, "/movie/b/", detail_page("beta", 102)).await;
    mount_page(&mock_server, "/movie/c/", detail_page("gamma", 103)).await;

    let config = create_test_config(
        &host,
        out.path(),
        vec![Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json")],
    );

    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let summary = coordinator.run().await;
    assert_eq!(summary.written_count(), 1);

    let movies = read_movies(&out.path().join("first-round.json"));
    assert_eq!(movies.len(), 3);

    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["alpha", "beta", "gamma"]);

    let first = &movies[0];
    assert_eq!(first.detail_url, format!("{}/movie/a/", host));
    assert_eq!(first.synopsis, "alpha synopsis");
    assert_eq!(first.description, "alpha plot.");
    assert_eq!(first.poster_url, "/poster/alpha.jpg");
    assert_eq!(first.trailer_url, "https://www.youtube.com/embed/alpha");
    assert_eq!(first.runtime_minutes, "101");
    assert_eq!(first.release_date, "2024/05/01");
}

#[tokio::test]
async fn test_failed_detail_page_is_omitted() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    let hrefs = ["/movie/1/", "/movie/2/", "/movie/3/", "/movie/4/", "/movie/5/"];
    mount_page(&mock_server, "/movie/now/0", listing_page(&hrefs)).await;
    for (i, href) in hrefs.iter().enumerate() {
        if i == 2 {
            Mock::given(method("GET"))
                .and(path(*href))
                .respond_with(ResponseTemplate::new(404))
                .mount(&mock_server)
                .await;
        } else {
            mount_page(&mock_server, href, detail_page(&format!("m{}", i + 1), 90)).await;
        }
    }

    let config = create_test_config(
        &host,
        out.path(),
        vec![Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json")],
    );

    let summary = Coordinator::new(config).unwrap().run().await;

    let movies = read_movies(&out.path().join("first-round.json"));
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["m1", "m2", "m4", "m5"]);

    match &summary.outcomes[0] {
        CategoryOutcome::Written(report) => {
            assert_eq!(report.links_found, 5);
            assert_eq!(report.records_written, 4);
            assert_eq!(report.detail_failures, 1);
        }
        other => panic!("expected written category, got {:?}", other),
    }
}

#[tokio::test]
async fn test_listing_failure_skips_only_that_category() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/movie/next/0"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/movie/now/0", listing_page(&["/movie/a/"])).await;
    mount_page(&mock_server, "/movie/a/", detail_page("alpha", 100)).await;

    // A stale artifact from an earlier run must survive the failed listing
    let stale = out.path().join("coming.json");
    std::fs::write(&stale, "stale").unwrap();

    let config = create_test_config(
        &host,
        out.path(),
        vec![
            Category::new("coming", "/movie/next/0", ".filmListAll li a", "coming.json"),
            Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json"),
        ],
    );

    let summary = Coordinator::new(config).unwrap().run().await;

    assert_eq!(summary.skipped_count(), 1);
    assert_eq!(summary.written_count(), 1);
    assert_eq!(std::fs::read_to_string(&stale).unwrap(), "stale");
    assert_eq!(read_movies(&out.path().join("first-round.json")).len(), 1);
}

#[tokio::test]
async fn test_duplicate_links_produce_duplicate_movies() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    mount_page(&mock_server, "/movie/now/0", listing_page(&["/movie/a/", "/movie/a/"])).await;
    mount_page(&mock_server, "/movie/a/", detail_page("alpha", 100)).await;

    let config = create_test_config(
        &host,
        out.path(),
        vec![Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json")],
    );

    Coordinator::new(config).unwrap().run().await;

    let movies = read_movies(&out.path().join("first-round.json"));
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0], movies[1]);
}

#[tokio::test]
async fn test_empty_listing_writes_empty_array() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    mount_page(&mock_server, "/movie/next2", listing_page(&[])).await;

    let config = create_test_config(
        &host,
        out.path(),
        vec![Category::new("future", "/movie/next2", ".filmNext2ListAll li a", "future.json")],
    );

    Coordinator::new(config).unwrap().run().await;

    assert_eq!(std::fs::read(out.path().join("future.json")).unwrap(), b"[]");
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    mount_page(&mock_server, "/movie/now/0", listing_page(&["/movie/a/", "/movie/b/"])).await;
    mount_page(&mock_server, "/movie/a/", detail_page("alpha", 100)).await;
    mount_page(&mock_server, "/movie/b/", detail_page("beta", 120)).await;

    let config = create_test_config(
        &host,
        out.path(),
        vec![Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json")],
    );
    let output = out.path().join("first-round.json");

    let coordinator = Coordinator::new(config).unwrap();
    coordinator.run().await;
    let first = std::fs::read(&output).unwrap();
    coordinator.run().await;
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_fetches_keep_discovery_order() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();
    let out = TempDir::new().unwrap();

    let hrefs = ["/movie/1/", "/movie/2/", "/movie/3/", "/movie/4/"];
    mount_page(&mock_server, "/movie/now/0", listing_page(&hrefs)).await;

    // Earlier links answer later, so completion order is reversed
    for (i, href) in hrefs.iter().enumerate() {
        let delay = Duration::from_millis(50 * (hrefs.len() - i) as u64);
        Mock::given(method("GET"))
            .and(path(*href))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(detail_page(&format!("m{}", i + 1), 90))
                    .set_delay(delay),
            )
            .mount(&mock_server)
            .await;
    }

    let mut config = create_test_config(
        &host,
        out.path(),
        vec![Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json")],
    );
    config.crawler.max_concurrent_fetches = 4;

    Coordinator::new(config).unwrap().run().await;

    let movies = read_movies(&out.path().join("first-round.json"));
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["m1", "m2", "m3", "m4"]);
}
