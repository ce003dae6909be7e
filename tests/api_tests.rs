//! HTTP client tests against a local mock of the OpenWeather endpoint

use atmosphere::api::{FetchError, WeatherClient};
use atmosphere::config::WeatherConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> WeatherClient {
    WeatherClient::new(WeatherConfig {
        api_key: "test-key".into(),
        base_url: server.uri(),
        default_city: "Paris".into(),
    })
}

fn tokyo_body() -> serde_json::Value {
    json!({
        "coord": {"lon": 139.69, "lat": 35.69},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 20, "feels_like": 19.4, "pressure": 1012, "humidity": 50},
        "wind": {"speed": 3.6},
        "sys": {"country": "JP"},
        "name": "Tokyo",
        "cod": 200
    })
}

#[tokio::test]
async fn test_fetch_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Tokyo"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_body()))
        .expect(1)
        .mount(&server)
        .await;

    let report = client(&server).fetch_current("Tokyo").await.unwrap();

    assert_eq!(report.location_name, "Tokyo");
    assert_eq!(report.country_code, "JP");
    assert_eq!(report.temperature_c, 20.0);
    assert_eq!(report.icon(), "☀️");
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_body()))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).fetch_current("New York").await.is_ok());
}

#[tokio::test]
async fn test_404_is_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).fetch_current("Atlantis").await.unwrap_err();

    assert!(matches!(err, FetchError::NotFound));
    assert_eq!(err.to_string(), "City not found");
}

#[tokio::test]
async fn test_any_failure_status_is_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_current("Paris").await.unwrap_err();

    assert_eq!(err.to_string(), "City not found");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_current("Paris").await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_request_error() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = WeatherClient::new(WeatherConfig {
        base_url: format!("http://{addr}"),
        ..WeatherConfig::default()
    });
    let err = client.fetch_current("Paris").await.unwrap_err();

    assert!(matches!(err, FetchError::Request(_)));
}
