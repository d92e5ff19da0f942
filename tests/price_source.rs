use portfolio_site::ticker::{HttpPriceSource, PriceTicker, TickerFrame};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn ticker_for(server: &MockServer) -> PriceTicker<HttpPriceSource> {
    let endpoint = Url::parse(&format!("{}/simple/price", server.uri())).unwrap();
    PriceTicker::new(HttpPriceSource::new(endpoint))
}

#[tokio::test]
async fn live_prices_replace_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let body = r#"{
        "bitcoin": { "usd": 70000.0, "usd_24h_change": 2.5 },
        "ethereum": { "usd": 3500.0, "usd_24h_change": -1.0 }
    }"#;
    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let frame = ticker_for(&server).poll().await;

    assert!(frame.live);
    let symbols: Vec<&str> = frame.quotes.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["BTC", "ETH"]);
    assert_eq!(frame.quotes[0].formatted_price(), "$70,000.00");
    assert_eq!(frame.quotes[1].formatted_change(), "-1.00%");
}

#[tokio::test]
async fn server_error_shows_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let ticker = ticker_for(&server);
    for _ in 0..3 {
        assert_eq!(ticker.poll().await, TickerFrame::fallback());
    }
}

#[tokio::test]
async fn malformed_body_shows_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    assert_eq!(ticker_for(&server).poll().await, TickerFrame::fallback());
}
