use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use spendtrack_server::{api::app_router, auth::AuthConfig, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    // Holds the database file for the lifetime of the test.
    _dir: TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        auth: AuthConfig {
            jwt_secret: vec![42u8; 32],
            access_token_ttl: Duration::from_secs(3600),
        },
    };
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config).unwrap(),
        _dir: dir,
    }
}

impl TestApp {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));
        (status, value)
    }

    async fn register(&self, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({ "email": email, "password": "correct horse", "name": "Test" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["accessToken"].as_str().unwrap().to_string()
    }

    async fn create_transaction(&self, token: &str, body: Value) -> Value {
        let (status, created) = self
            .send(Method::POST, "/api/transactions", Some(token), Some(body))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{created}");
        created
    }
}

#[tokio::test]
async fn root_and_health_are_public() {
    let app = spawn_app().await;

    let (status, body) = app.send(Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Hello,world".to_string()));

    let (status, _) = app.send(Method::GET, "/api/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.send(Method::GET, "/api/readyz", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = spawn_app().await;

    for uri in ["/api/transactions", "/api/budgets", "/api/reports/weekly", "/api/auth/me"] {
        let (status, body) = app.send(Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body, json!({ "code": 401, "message": "Unauthorized" }));
    }

    let (status, _) = app
        .send(Method::GET, "/api/transactions", Some("garbage"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_and_me() {
    let app = spawn_app().await;
    let token = app.register("Alice@Example.com").await;

    let (status, me) = app.send(Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "alice@example.com");
    assert!(me.get("passwordHash").is_none());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "alice@example.com", "password": "another password" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "correct horse" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 3600);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "wrong horse" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn transaction_lifecycle_is_scoped_to_owner() {
    let app = spawn_app().await;
    let alice = app.register("alice@example.com").await;
    let bob = app.register("bob@example.com").await;

    let created = app
        .create_transaction(
            &alice,
            json!({
                "amount": 42.5,
                "description": "Groceries",
                "category": "Food",
                "type": "expense",
                "date": "2024-05-01"
            }),
        )
        .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["type"], "expense");
    assert_eq!(created["category"], "Food");
    assert_eq!(created["amount"].as_f64(), Some(42.5));
    assert!(created["user"].is_string());

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/transactions/{id}"), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = app
        .send(Method::GET, &format!("/api/transactions/{id}"), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Transaction not found");

    let (status, listed) = app.send(Method::GET, "/api/transactions", Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/transactions/{id}"),
            Some(&alice),
            Some(json!({ "amount": 50 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["amount"].as_f64(), Some(50.0));
    assert_eq!(updated["description"], "Groceries");

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/transactions/{id}"), Some(&bob), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .send(Method::DELETE, &format!("/api/transactions/{id}"), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Transaction removed" }));

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/transactions/{id}"), Some(&alice), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_bodies_are_rejected() {
    let app = spawn_app().await;
    let token = app.register("alice@example.com").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/transactions",
            Some(&token),
            Some(json!({ "amount": 10, "description": "x", "category": "Food", "type": "transfer" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/transactions",
            Some(&token),
            Some(json!({ "amount": 10, "description": "x", "category": "   ", "type": "expense" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn budgets_report_spent_and_reject_duplicates() {
    let app = spawn_app().await;
    let token = app.register("alice@example.com").await;

    let (status, budget) = app
        .send(
            Method::POST,
            "/api/budgets",
            Some(&token),
            Some(json!({ "category": "Food", "limit": 100 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(budget["period"], "Monthly");

    let (status, body) = app
        .send(
            Method::POST,
            "/api/budgets",
            Some(&token),
            Some(json!({ "category": "Food", "limit": 300, "period": "Weekly" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Budget for this category already exists");

    for (amount, kind) in [(50, "expense"), (30, "expense"), (1000, "income")] {
        app.create_transaction(
            &token,
            json!({ "amount": amount, "description": "", "category": "Food", "type": kind }),
        )
        .await;
    }

    let (status, budgets) = app.send(Method::GET, "/api/budgets", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(budgets.as_array().unwrap().len(), 1);
    assert_eq!(budgets[0]["category"], "Food");
    assert_eq!(budgets[0]["limit"].as_f64(), Some(100.0));
    assert_eq!(budgets[0]["spent"].as_f64(), Some(80.0));

    let id = budget["id"].as_str().unwrap();
    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/budgets/{id}"),
            Some(&token),
            Some(json!({ "period": "Yearly" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["period"], "Yearly");
    assert_eq!(updated["limit"].as_f64(), Some(100.0));

    let (status, body) = app
        .send(Method::DELETE, &format!("/api/budgets/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Budget removed" }));

    let (status, body) = app
        .send(Method::DELETE, &format!("/api/budgets/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Budget not found");
}

#[tokio::test]
async fn weekly_and_monthly_reports() {
    let app = spawn_app().await;
    let token = app.register("alice@example.com").await;

    let (status, empty) = app
        .send(Method::GET, "/api/reports/weekly", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["totalExpenses"].as_f64(), Some(0.0));
    assert_eq!(empty["categories"], json!([]));

    for (amount, category) in [(50, "Food"), (30, "Food"), (200, "Rent")] {
        app.create_transaction(
            &token,
            json!({ "amount": amount, "description": "", "category": category, "type": "expense" }),
        )
        .await;
    }

    let (status, weekly) = app
        .send(Method::GET, "/api/reports/weekly", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weekly["totalExpenses"].as_f64(), Some(280.0));
    let categories = weekly["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["category"], "Rent");
    assert_eq!(categories[0]["count"], 1);
    assert_eq!(categories[0]["percentage"], 71);
    assert_eq!(categories[1]["category"], "Food");
    assert_eq!(categories[1]["total"].as_f64(), Some(80.0));
    assert_eq!(categories[1]["count"], 2);
    assert_eq!(categories[1]["percentage"], 29);

    let (status, monthly) = app
        .send(Method::GET, "/api/reports/monthly", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(monthly["startDate"].is_string());
    let categories = monthly["categories"].as_array().unwrap();
    assert_eq!(categories[0]["category"], "Rent");
    assert_eq!(categories[1]["total"].as_f64(), Some(80.0));
    assert_eq!(categories[1]["weeklyData"].as_array().unwrap().len(), 1);
    assert!(categories[1].get("percentage").is_none());
}

#[tokio::test]
async fn out_of_range_totals_return_generic_server_error() {
    let app = spawn_app().await;
    let token = app.register("whale@example.com").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/budgets",
            Some(&token),
            Some(json!({ "category": "Food", "limit": 100 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    for _ in 0..2 {
        app.create_transaction(
            &token,
            json!({ "amount": 7e28, "description": "", "category": "Food", "type": "expense" }),
        )
        .await;
    }

    for uri in ["/api/reports/weekly", "/api/reports/monthly", "/api/budgets"] {
        let (status, body) = app.send(Method::GET, uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "code": 500, "message": "Something went wrong!" }));
    }
}
