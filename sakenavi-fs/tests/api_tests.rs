//! Integration tests for sakenavi-fs API endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use sakenavi_common::models::{Area, Brand, Brewery, FlavorChart};
use sakenavi_fs::snapshot::ReferenceSnapshot;
use sakenavi_fs::AppState;

/// Test helper: build the app over a small in-memory snapshot
fn create_test_app() -> axum::Router {
    let areas = vec![
        Area {
            id: 1,
            name: "東京都".to_string(),
        },
        Area {
            id: 2,
            name: String::new(),
        },
    ];
    let breweries = vec![
        Brewery {
            id: 10,
            name: "Edo Brewery".to_string(),
            area_id: 1,
        },
        Brewery {
            id: 11,
            name: String::new(),
            area_id: 1,
        },
    ];
    let brands = vec![
        Brand {
            id: 100,
            name: "江戸の舞".to_string(),
            brewery_id: 10,
        },
        Brand {
            id: 101,
            name: "隅田川".to_string(),
            brewery_id: 10,
        },
    ];
    let charts = vec![FlavorChart {
        brand_id: 100,
        f1: 0.91,
        f2: 0.91,
        f3: 0.2,
        f4: 0.2,
        f5: 0.833,
        f6: 0.2,
    }];

    let snapshot = ReferenceSnapshot::from_records(areas, breweries, brands, charts);
    sakenavi_fs::build_router(AppState::new(snapshot))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();
    let (status, json) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "sakenavi-fs");
}

#[tokio::test]
async fn test_list_areas_excludes_unnamed() {
    let app = create_test_app();
    let (status, json) = get_json(app, "/api/areas").await;
    assert_eq!(status, StatusCode::OK);
    let options = json["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["name"], "東京都");
    assert_eq!(options[0]["id"], 1);
}

#[tokio::test]
async fn test_list_breweries_filters_by_area() {
    let app = create_test_app();
    let (status, json) = get_json(app, "/api/breweries?areaId=1").await;
    assert_eq!(status, StatusCode::OK);
    let options = json["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["name"], "Edo Brewery");
    assert_eq!(options[0]["id"], 10);
}

#[tokio::test]
async fn test_list_breweries_empty_for_unknown_area() {
    let app = create_test_app();
    let (status, json) = get_json(app, "/api/breweries?areaId=47").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["options"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_features_serves_catalog() {
    let app = create_test_app();
    let (status, json) = get_json(app, "/api/features").await;
    assert_eq!(status, StatusCode::OK);
    let features = json.as_array().unwrap();
    assert_eq!(features.len(), 6);
    assert_eq!(features[0]["label"], "華やか");
    assert_eq!(features[0]["axis"], "f1");
    assert_eq!(features[4]["english"], "Dry");
}

#[tokio::test]
async fn test_flavor_summary_summarized() {
    let app = create_test_app();
    // feature=ドライ, percent-encoded
    let (status, json) = get_json(
        app,
        "/api/flavor-summary?brandId=100&feature=%E3%83%89%E3%83%A9%E3%82%A4",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "summarized");
    assert_eq!(json["featureValue"], 0.84);
    assert_eq!(
        json["headline"],
        "This sake's characteristic flavor is Floral and Rich."
    );
    assert_eq!(json["radar"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_flavor_summary_no_flavor_data() {
    let app = create_test_app();
    let (status, json) = get_json(
        app,
        "/api/flavor-summary?brandId=101&feature=%E3%83%89%E3%83%A9%E3%82%A4",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "noFlavorData");
    assert_eq!(json["brandId"], 101);
    assert!(json.get("headline").is_none());
}

#[tokio::test]
async fn test_flavor_summary_unknown_feature_is_400() {
    let app = create_test_app();
    let (status, json) = get_json(app, "/api/flavor-summary?brandId=100&feature=Sweet").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "UNKNOWN_FEATURE");
}
