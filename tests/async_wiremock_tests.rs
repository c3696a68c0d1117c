//! Integration tests for the async Google client using wiremock
#![cfg(feature = "async")]

use geocoder::async_impl::google::Google;
use geocoder::async_impl::{Forward, Reverse};
use geocoder::google::GoogleConfig;
use geocoder::{Address, GeocodingError, Location};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn create_test_client(mock_server: &MockServer) -> Google {
    let config = GoogleConfig {
        api_key: "secret".to_string(),
        endpoint: format!("{}/geocode/json", mock_server.uri()),
        timeout_secs: Some(5),
    };
    Google::from_config(&config)
}

#[tokio::test]
async fn forward_returns_first_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "789"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                { "geometry": { "location": { "lat": 1.5, "lng": 2.5 } } },
                { "geometry": { "location": { "lat": 3.5, "lng": 4.5 } } }
            ],
            "status": "OK"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let address = Address {
        number: 789,
        ..Default::default()
    };
    let result = client.forward(&address).await;

    assert_eq!(result.unwrap(), Location::new(1.5, 2.5));
}

#[tokio::test]
async fn reverse_maps_components() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("latlng", "51.50000000,-0.12000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "address_components": [
                    { "long_name": "Westminster", "short_name": "Westminster", "types": ["neighborhood", "political"] },
                    { "long_name": "London", "short_name": "London", "types": ["postal_town"] },
                    { "long_name": "United Kingdom", "short_name": "GB", "types": ["country", "political"] }
                ],
                "formatted_address": "Westminster, London, UK",
                "geometry": { "location": { "lat": 51.5, "lng": -0.12 } },
                "types": ["neighborhood", "political"]
            }],
            "status": "OK"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.reverse(&Location::new(51.5, -0.12)).await;

    let addresses = result.unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].neighborhood, "Westminster");
    assert_eq!(addresses[0].city, "");
    assert_eq!(addresses[0].country, "United Kingdom");
    assert_eq!(addresses[0].place_type, "neighborhood");
}

#[tokio::test]
async fn zero_results_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "results": [], "status": "ZERO_RESULTS" })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .reverse_with_language(&Location::new(0.0, 0.0), "de")
        .await;

    assert!(
        matches!(result, Err(GeocodingError::NoResults)),
        "Expected NoResults, got: {:?}",
        result
    );
}
