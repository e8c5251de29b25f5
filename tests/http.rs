//! End-to-end tests: load a CSV fixture, serve the router on an ephemeral
//! port and talk to it over HTTP.

use car_chooser::dataset::loader::load_dataset;
use car_chooser::search::types::{RankingMode, SearchSettings};
use car_chooser::server::build_router;
use serde_json::Value;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

const FIXTURE: &str = "\
Title,Link,Price,Mileage,Year,power[HP],Fuel Type,Gearbox,Voivodeship
Audi A4,https://example.com/1,\"45 900 PLN\",\"180 000 km\",2014,150,Diesel,Manual,Mazowieckie
Skoda Octavia,https://example.com/2,\"38 000 PLN\",\"120 000 km\",2016,110,Petrol,Manual,Pomorskie
BMW 320,https://example.com/3,\"62 000 PLN\",\"90 000 km\",2018,190,Diesel,Automatic,Mazowieckie
Toyota Yaris,https://example.com/4,\"29 000 PLN\",\"60 000 km\",2019,72,Petrol,Manual,Śląskie
Ford Focus,https://example.com/5,\"22 000 PLN\",\"210 000 km\",2012,115,Diesel,Manual,Pomorskie
Kia Ceed,https://example.com/6,\"51 000 PLN\",\"40 000 km\",2020,140,Petrol,Automatic,Mazowieckie
Opel Astra,https://example.com/7,\"27 000 PLN\",\"160 000 km\",2015,136,Diesel,Manual,Śląskie
Audi A4 again,https://example.com/1/,\"45 900 PLN\",\"180 000 km\",2014,150,Diesel,Manual,Mazowieckie
";

async fn spawn_server(settings: SearchSettings) -> (SocketAddr, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cleaned_aukcje.csv");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(FIXTURE.as_bytes())
        .unwrap();

    let dataset = load_dataset(&path, None).unwrap();
    let app = build_router(Arc::new(dataset), settings);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, dir)
}

fn titles(listings: &Value) -> Vec<String> {
    listings
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_root_page_is_served() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Car Chooser"));
    assert!(body.contains("/api/results"));
}

#[tokio::test]
async fn test_root_page_only_links_http_urls() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains(r"/^https?:\/\//i.test(link"));
    assert!(body.contains("a.href = href;"));
    assert!(!body.contains("a.href = listing.link"));
}

#[tokio::test]
async fn test_options_endpoint() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let body: Value = reqwest::get(format!("http://{addr}/api/options"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["fuel_types"], serde_json::json!(["Diesel", "Petrol"]));
    assert_eq!(body["gearboxes"], serde_json::json!(["Automatic", "Manual"]));
    assert_eq!(
        body["voivodeships"],
        serde_json::json!(["Mazowieckie", "Pomorskie", "Śląskie"])
    );
}

#[tokio::test]
async fn test_no_filters_returns_first_five_rows() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let body: Value = reqwest::get(format!("http://{addr}/api/results"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_count"], 8);
    assert_eq!(body["count"], 5);
    assert_eq!(
        titles(&body["top5"]),
        vec!["Audi A4", "Skoda Octavia", "BMW 320", "Toyota Yaris", "Ford Focus"]
    );
}

#[tokio::test]
async fn test_filtered_query_and_form_agree() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;
    let client = reqwest::Client::new();
    let filters = [("fuel_type", "Diesel"), ("price_max", "50 000"), ("year_min", "2013")];

    let from_query: Value = client
        .get(format!("http://{addr}/api/results"))
        .query(&filters)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let from_form: Value = client
        .post(format!("http://{addr}/results"))
        .form(&filters)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        titles(&from_query["top5"]),
        vec!["Audi A4", "Opel Astra", "Audi A4 again"]
    );
    assert_eq!(from_query, from_form);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let (addr, _dir) = spawn_server(SearchSettings {
        ranking: RankingMode::Weighted,
        dedup: false,
    })
    .await;
    let url = format!("http://{addr}/api/results?mileage_max=200000&price_max=60000");

    let first = reqwest::get(&url).await.unwrap().text().await.unwrap();
    for _ in 0..3 {
        let again = reqwest::get(&url).await.unwrap().text().await.unwrap();
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn test_weighted_ranking_with_dedup() {
    let (addr, _dir) = spawn_server(SearchSettings {
        ranking: RankingMode::Weighted,
        dedup: true,
    })
    .await;

    let body: Value = reqwest::get(format!("http://{addr}/api/results?mileage_max=250000"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["ranking"], "weighted");
    assert_eq!(body["total_count"], 7, "duplicate Audi link dropped");
    assert_eq!(
        titles(&body["top5"]),
        vec!["Kia Ceed", "Toyota Yaris", "BMW 320", "Skoda Octavia", "Opel Astra"]
    );
}

#[tokio::test]
async fn test_no_matches_is_ok_and_empty() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let resp = reqwest::get(format!("http://{addr}/api/results?fuel_type=Electric"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 0);
    assert_eq!(body["top5"], serde_json::json!([]));
}

#[tokio::test]
async fn test_invalid_filter_is_rejected_with_message() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let resp = reqwest::get(format!("http://{addr}/api/results?price_max=abc"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["field"], "price_max");
    assert!(body["error"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_stats_and_health() {
    let (addr, _dir) = spawn_server(SearchSettings::default()).await;

    let stats: Value = reqwest::get(format!("http://{addr}/debug/stats"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["listings"], 8);
    assert_eq!(stats["ranking"], "source");
    assert_eq!(stats["dedup"], false);

    let health: Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
}
