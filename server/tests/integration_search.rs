use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use lse_core::{KeywordIndex, NoiseWords};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;

fn tiny_index() -> KeywordIndex {
    let mut index = KeywordIndex::new(NoiseWords::parse("the a"));
    index.add_document("docA", "red red red red red".split_whitespace());
    index.add_document("docB", "car car car car car car car".split_whitespace());
    index.add_document("docC", "the car car car car car.".split_whitespace());
    index
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let app = lse_server::router(tiny_index());
    let (status, json) = call(app, "/search?kw1=red&kw2=Car").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched"], true);
    let docs: Vec<&str> =
        json["results"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(docs, vec!["docB", "docA", "docC"]);
}

#[tokio::test]
async fn search_without_matches() {
    let app = lse_server::router(tiny_index());
    let (status, json) = call(app, "/search?kw1=zebra&kw2=giraffe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched"], false);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_limit_is_clamped() {
    let app = lse_server::router(tiny_index());
    let (_, json) = call(app, "/search?kw1=car&kw2=red&limit=1").await;
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert_eq!(json["results"][0], "docB");
}

#[tokio::test]
async fn search_limit_above_five_returns_five() {
    let mut index = KeywordIndex::new(NoiseWords::new());
    for i in 0..8 {
        index.add_document(&format!("d{i}"), ["car"].iter());
    }
    let (_, json) = call(lse_server::router(index), "/search?kw1=car&kw2=red&limit=50").await;
    assert_eq!(json["results"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn keyword_lists_occurrences() {
    let app = lse_server::router(tiny_index());
    let (_, json) = call(app.clone(), "/keyword/car").await;
    let occs = json["occurrences"].as_array().unwrap();
    assert_eq!(occs.len(), 2);
    assert_eq!(occs[0]["document"], "docB");
    assert_eq!(occs[0]["frequency"], 7);

    let (_, stats) = call(app, "/stats").await;
    assert_eq!(stats["documents"], 3);
    assert_eq!(stats["keywords"], 2);
}

#[tokio::test]
async fn builds_from_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("noise.txt"), "the").unwrap();
    fs::write(dir.path().join("docs.txt"), "one.txt").unwrap();
    fs::write(dir.path().join("one.txt"), "The rust book.").unwrap();
    let app = lse_server::build_app(
        &dir.path().join("docs.txt").to_string_lossy(),
        &dir.path().join("noise.txt").to_string_lossy(),
    )
    .unwrap();
    let (_, json) = call(app, "/search?kw1=book&kw2=rust").await;
    assert_eq!(json["results"], serde_json::json!(["one.txt"]));
}
