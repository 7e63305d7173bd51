use std::{fs, path::Path, sync::Arc};

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use dietwise_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::Value;
use tempfile::TempDir;
use test_context::{AsyncTestContext, test_context};

const DATASET: &str = "\
,Descrip,category,Iron_mg,Calcium_mg,Protein_g
0,\"Lentils, mature seeds, cooked\",Muscle_Gain,3.33,19,9.02
1,\"Seeds, hemp seed, hulled\",Muscle_Gain,7.95,70,31.56
2,\"Beef, liver, cooked\",Muscle_Gain,6.54,6,29.08
3,\"Seeds, chia seeds, dried\",Muscle_Gain,7.72,631,16.54
4,\"Nuts, almonds\",Weight_Gain,3.71,269,21.15
5,\"Spinach, raw\",Weight_Loss,2.71,99,2.86
6,\"Crustaceans, shrimp, cooked\",Weight_Loss,0.51,70,23.98
";

// bmi <= 18.5 -> Weight_Gain, bmi > 30 -> Weight_Loss, else Muscle_Gain
const MODEL: &str = r#"{
    "trees": [
        {
            "nodes": [
                {"feature": 2, "threshold": 18.5, "left": 1, "right": 2},
                {"label": "Weight_Gain"},
                {"feature": 2, "threshold": 30.0, "left": 3, "right": 4},
                {"label": "Muscle_Gain"},
                {"label": "Weight_Loss"}
            ]
        }
    ]
}"#;

const NO_FIELDS: [(&str, &str); 0] = [];

fn test_server(dataset: &Path, model: &Path) -> TestServer {
    let args = Args::parse_from([
        "dietwise",
        "--dataset-path",
        dataset.to_str().unwrap(),
        "--model-path",
        model.to_str().unwrap(),
        "--sample-size",
        "5",
    ]);

    let state = state(Arc::new(args)).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

struct DietwiseContext {
    server: TestServer,
    _dir: TempDir,
}

impl AsyncTestContext for DietwiseContext {
    async fn setup() -> Self {
        let dir = TempDir::new().unwrap();
        let dataset = dir.path().join("done_food_data.csv");
        let model = dir.path().join("food_model.json");
        fs::write(&dataset, DATASET).unwrap();
        fs::write(&model, MODEL).unwrap();

        Self {
            server: test_server(&dataset, &model),
            _dir: dir,
        }
    }
}

/// Neither file exists, so both adapters start unavailable.
struct DegradedContext {
    server: TestServer,
    _dir: TempDir,
}

impl AsyncTestContext for DegradedContext {
    async fn setup() -> Self {
        let dir = TempDir::new().unwrap();

        Self {
            server: test_server(
                &dir.path().join("missing.csv"),
                &dir.path().join("missing.json"),
            ),
            _dir: dir,
        }
    }
}

fn descriptions(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_str().unwrap().to_string())
        .collect()
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_index_lists_endpoints(ctx: &mut DietwiseContext) {
    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "dietwise");
    assert!(
        body["endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .any(|endpoint| endpoint["path"] == "/musclegain")
    );
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_predict_returns_display_label(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/predict")
        .form(&[("input_1", "110"), ("input_2", "175"), ("input_3", "35.9")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["goal"], "Weight Loss");
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_predict_rejects_non_numeric_input(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/predict")
        .form(&[("input_1", "70"), ("input_2", "tall"), ("input_3", "22")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("input_2"));
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_predict_rejects_missing_field(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/predict")
        .form(&[("input_1", "70"), ("input_2", "175")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_recommend_without_flags_samples_category(ctx: &mut DietwiseContext) {
    let response = ctx.server.post("/musclegain").form(&NO_FIELDS).await;

    response.assert_status_ok();
    let foods = descriptions(&response.json());
    assert_eq!(foods.len(), 4);
    assert!(foods.contains(&"Beef, liver, cooked".to_string()));
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_recommend_applies_every_flag(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/musclegain")
        .form(&[("vegetarian", "vegetarian"), ("iron", "iron")])
        .await;

    response.assert_status_ok();
    let mut foods = descriptions(&response.json());
    foods.sort();
    assert_eq!(
        foods,
        vec!["Seeds, chia seeds, dried", "Seeds, hemp seed, hulled"]
    );

    let response = ctx
        .server
        .post("/musclegain")
        .form(&[("iron", "on"), ("calcium", "on")])
        .await;

    assert_eq!(
        descriptions(&response.json()),
        vec!["Seeds, chia seeds, dried"]
    );
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_recommend_empty_match_is_empty_list(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/weightloss")
        .form(&[("iron", "iron")])
        .await;

    response.assert_status_ok();
    assert!(descriptions(&response.json()).is_empty());
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_recommend_unknown_goal_is_not_found(ctx: &mut DietwiseContext) {
    let response = ctx.server.post("/weightmaintain").form(&NO_FIELDS).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_search_sorts_numerically(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/search")
        .form(&[("sort_by", "Calcium_mg")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let calcium: Vec<&str> = body["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["Calcium_mg"].as_str().unwrap())
        .collect();
    assert_eq!(calcium, vec!["6", "19", "70", "70", "99", "269", "631"]);
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_search_defaults_to_description(ctx: &mut DietwiseContext) {
    let response = ctx.server.post("/search").form(&NO_FIELDS).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["columns"][1], "Descrip");
    assert_eq!(body["data"]["rows"][0]["Descrip"], "Beef, liver, cooked");
    assert_eq!(body["data"]["rows"].as_array().unwrap().len(), 7);
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_search_unknown_column_is_bad_request(ctx: &mut DietwiseContext) {
    let response = ctx
        .server
        .post("/search")
        .form(&[("sort_by", "Sodium_mg")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_health_ready(ctx: &mut DietwiseContext) {
    ctx.server.get("/health/live").await.assert_status_ok();

    let response = ctx.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["data"]["dataset"]["records"], 7);
    assert_eq!(body["data"]["model"]["trees"], 1);
}

#[test_context(DietwiseContext)]
#[tokio::test]
async fn test_openapi_document_is_served(ctx: &mut DietwiseContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/predict"].is_object());
}

#[test_context(DegradedContext)]
#[tokio::test]
async fn test_degraded_service_keeps_serving(ctx: &mut DegradedContext) {
    ctx.server.get("/").await.assert_status_ok();
    ctx.server.get("/health/live").await.assert_status_ok();

    let response = ctx.server.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["ready"], false);

    let response = ctx
        .server
        .post("/predict")
        .form(&[("input_1", "70"), ("input_2", "175"), ("input_3", "22")])
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "Model unavailable");

    let response = ctx.server.post("/weightgain").form(&NO_FIELDS).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "Food dataset unavailable");

    let response = ctx.server.post("/search").form(&NO_FIELDS).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
