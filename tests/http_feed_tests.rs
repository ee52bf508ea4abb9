use quakemap::{
    data::feed::load_features, pipeline, FeedConfig, FeedSource, HttpFeed, MapError,
    QuakeMapConfig,
};
use serde_json::json;
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Serve a single canned HTTP response and return the URL it answers on
async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 8192];
        let _ = socket.read(&mut request).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/summary/all_week.geojson")
}

fn feed_body() -> String {
    json!({
        "type": "FeatureCollection",
        "metadata": { "title": "USGS All Earthquakes, Past Week", "count": 2 },
        "features": [
            {
                "type": "Feature",
                "id": "us7000abcd",
                "properties": { "place": "10 km N of Somewhere", "time": 1700000000000i64, "mag": 4.6 },
                "geometry": { "type": "Point", "coordinates": [-117.5, 35.7, 8.2] }
            },
            {
                "type": "Feature",
                "id": "us7000abce",
                "properties": { "place": "Offshore", "time": 1700000100000i64, "mag": 2.1 },
                "geometry": { "type": "Point", "coordinates": [142.3, 38.1, 95.0] }
            }
        ]
    })
    .to_string()
}

/// Client that talks to the loopback server directly, whatever proxy the
/// environment configures
fn http_feed(url: String) -> HttpFeed {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpFeed::with_client(client, url)
}

#[test]
fn test_http_feed_from_config() {
    let config = FeedConfig::new("http://127.0.0.1:9/feed.geojson")
        .with_timeout(Duration::from_secs(1));
    let feed = HttpFeed::new(&config).unwrap();
    assert_eq!(feed.url(), "http://127.0.0.1:9/feed.geojson");
    assert_eq!(feed.describe(), feed.url());
}

#[tokio::test]
async fn test_http_feed_yields_features_in_order() {
    let url = serve_once("200 OK", feed_body()).await;
    let feed = http_feed(url.clone());
    assert_eq!(feed.url(), url);

    let features = load_features(&feed).await.unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["id"], "us7000abcd");
    assert_eq!(features[1]["id"], "us7000abce");
}

#[tokio::test]
async fn test_pipeline_over_http() {
    let url = serve_once("200 OK", feed_body()).await;
    let config = QuakeMapConfig::default().with_feed(FeedConfig::new(url.clone()));
    let feed = http_feed(config.feed.url.clone());

    let composition = pipeline::run(&feed, &config).await.unwrap();
    assert_eq!(composition.markers, 2);
    assert_eq!(composition.skipped, 0);

    let markers = composition.map.earthquakes().unwrap().markers();
    assert_eq!(markers[0].style().fill_color.to_hex(), "#52fd06");
    assert_eq!(markers[1].style().fill_color.to_hex(), "#ff0819");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let url = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let feed = http_feed(url.clone());

    match feed.fetch().await {
        Err(MapError::HttpStatus { status, url: failed }) => {
            assert_eq!(status, 500);
            assert_eq!(failed, url);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected the fetch to fail"),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_reported() {
    let url = serve_once("200 OK", "<html>maintenance</html>".to_string()).await;
    let feed = http_feed(url);

    let result = feed.fetch().await;
    assert!(matches!(result, Err(MapError::Serialization(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let feed = http_feed(format!("http://{addr}/all_week.geojson"));
    let result = pipeline::run(&feed, &QuakeMapConfig::default()).await;
    assert!(matches!(result.err(), Some(MapError::Network(_))));
}
