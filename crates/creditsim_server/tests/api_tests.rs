use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use creditsim_server::{ServerArgs, build_app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn router() -> axum::Router {
    build_app(&ServerArgs {
        seed: Some(42),
        ..Default::default()
    })
    .unwrap()
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_default_probability() {
    let (status, body) = post_json(
        router(),
        "/simulate",
        json!({"credit_score": 650, "noise_std": 0.0, "num_simulations": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_probability"], json!(0.05));
    assert_eq!(body["seed"], json!(42));
}

#[tokio::test]
async fn test_macroeconomic_factors() {
    let (status, body) = post_json(
        router(),
        "/simulate_macroeconomic_factors",
        json!({"credit_score": 720, "num_years": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let scores = body["projected_credit_scores"].as_array().unwrap();
    let variance = body["yearly_variance"].as_array().unwrap();
    assert_eq!(scores.len(), 3);
    assert_eq!(variance.len(), 3);
    for score in scores {
        let score = score.as_f64().unwrap();
        assert!((300.0..=850.0).contains(&score));
    }
}

#[tokio::test]
async fn test_financial_behavior() {
    let (status, body) = post_json(
        router(),
        "/simulate_financial_behavior",
        json!({
            "credit_score": 700,
            "payment_history": 90,
            "debt_to_income_ratio": 30,
            "spending_habits": 6,
            "num_trials": 300
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let dist = &body["risk_category_distribution"];
    let total = dist["low"].as_u64().unwrap()
        + dist["medium"].as_u64().unwrap()
        + dist["high"].as_u64().unwrap();
    assert_eq!(total, 300);
}

#[tokio::test]
async fn test_employment_status() {
    let (status, body) = post_json(
        router(),
        "/simulate_employment_status",
        json!({
            "credit_score": 700,
            "employment_type": "full-time",
            "job_stability": 8,
            "income_level": 55000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let projection = body["income_projection"].as_array().unwrap();
    assert_eq!(projection.len(), 5);
    assert_eq!(projection[0]["year"], json!(1));
    assert_eq!(projection[4]["year"], json!(5));
    assert!(projection[0]["income"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_geographic_location() {
    let (status, body) = post_json(
        router(),
        "/simulate_geographic_location",
        json!({
            "credit_score": 700,
            "region": "urban",
            "housing_market_trends": 5,
            "regional_unemployment_rate": 5,
            "num_simulations": 1000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let risk = &body["regional_risk"];
    let expected = 0.4 * 700.0 / 850.0 + 0.36 + 0.1 - 0.05;
    assert!((risk["risk_score"].as_f64().unwrap() - expected).abs() < 0.02);
    assert_eq!(risk["region_factor"], json!(1.2));
    assert_eq!(risk["market_factor"], json!(0.5));
    assert_eq!(risk["unemployment_factor"], json!(0.5));
}

#[tokio::test]
async fn test_age_demographics() {
    let (status, body) = post_json(
        router(),
        "/simulate_age_demographics",
        json!({
            "credit_score": 680,
            "age_group": "36-45",
            "education_level": "bachelor",
            "marital_status": "married"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let impact = &body["demographic_impact"];
    assert_eq!(impact["age_group"], json!("36-45"));
    assert_eq!(impact["education_level"], json!("bachelor"));
    assert_eq!(impact["marital_status"], json!("married"));
    assert_eq!(impact["age_factor"], json!(1.1));
    assert!(impact["impact_score"].is_number());
}

#[tokio::test]
async fn test_health_insurance() {
    let (status, body) = post_json(
        router(),
        "/simulate_health_insurance",
        json!({
            "credit_score": 700,
            "health_conditions": 3,
            "health_insurance_type": "public",
            "insurance_coverage_level": 60
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let risk = &body["health_risk"];
    assert_eq!(risk["insurance_factor"], json!(1.0));
    assert_eq!(risk["coverage_factor"], json!(0.6));
    assert!(risk["health_risk_score"].is_number());
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let (status, body) = post_json(router(), "/simulate", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("credit_score"));
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let (status, body) = post_json(
        router(),
        "/simulate_employment_status",
        json!({
            "credit_score": 700,
            "employment_type": "contractor",
            "job_stability": 5,
            "income_level": 40000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("employment_type"));
    assert!(body["error"].as_str().unwrap().contains("contractor"));
}

#[tokio::test]
async fn test_trial_limit_is_bad_request() {
    let app = build_app(&ServerArgs {
        max_trials: 10,
        ..Default::default()
    })
    .unwrap();

    let (status, body) = post_json(
        app,
        "/simulate",
        json!({"credit_score": 700, "num_simulations": 11}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("num_simulations"));
}

#[tokio::test]
async fn test_zero_trials_names_request_field() {
    let (status, body) = post_json(
        router(),
        "/simulate",
        json!({"credit_score": 700, "num_simulations": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], json!("num_simulations"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/simulate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_same_seed_same_response() {
    let body = json!({"credit_score": 610, "seed": 7});
    let (_, first) = post_json(router(), "/simulate", body.clone()).await;
    let (_, second) = post_json(router(), "/simulate", body).await;

    assert_eq!(first, second);
    assert_eq!(first["seed"], json!(7));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list() {
    let app = build_app(&ServerArgs {
        allowed_origins: vec!["https://risk.example.com".to_string()],
        ..Default::default()
    })
    .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://risk.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://risk.example.com"
    );
}
