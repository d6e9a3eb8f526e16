use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use carbooker::config::Config;
use carbooker::models::BookingStatus;

pub const CRON_SECRET: &str = "test-cron-secret";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/auth/register"))
            .json(&json!({ "email": email, "password": password, "name": name }))
            .send()
            .await
            .expect("register request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn login(&self, email: &str, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Register the first user (becomes admin). Returns (token, user_id).
    pub async fn bootstrap_admin(&self) -> (String, Uuid) {
        let (body, status) = self.register("admin@test.com", "password123", "Admin").await;
        assert_eq!(status, StatusCode::OK, "bootstrap register failed: {body}");
        let token = body["access_token"].as_str().unwrap().to_string();
        let user_id = body["user"]["id"].as_str().unwrap().parse().unwrap();
        (token, user_id)
    }

    /// Register a regular customer. Returns (token, user_id).
    pub async fn register_customer(&self, email: &str) -> (String, Uuid) {
        let (body, status) = self.register(email, "password123", "Customer").await;
        assert_eq!(status, StatusCode::OK, "customer register failed: {body}");
        let token = body["access_token"].as_str().unwrap().to_string();
        let user_id = body["user"]["id"].as_str().unwrap().parse().unwrap();
        (token, user_id)
    }

    pub async fn seed_car(&self, name: &str, price_per_day_cents: i64, available: bool) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO cars (name, model, year, price_per_day_cents, available)
             VALUES ($1, $2, 2024, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(format!("{name} GT"))
        .bind(price_per_day_cents)
        .bind(available)
        .fetch_one(&self.pool)
        .await
        .expect("seed car failed")
    }

    pub async fn seed_location(&self, name: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO locations (name, address, city)
             VALUES ($1, '1 Test Street', 'Testville') RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .expect("seed location failed")
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn seed_booking(
        &self,
        user_id: Uuid,
        car_id: Uuid,
        location_id: Uuid,
        pickup_at: DateTime<Utc>,
        dropoff_at: DateTime<Utc>,
        status: BookingStatus,
    ) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO bookings (user_id, car_id, pickup_location_id, dropoff_location_id,
                                   pickup_at, dropoff_at, status, daily_rate_cents, total_cents)
             VALUES ($1, $2, $3, $3, $4, $5, $6, 5000, 25000) RETURNING id",
        )
        .bind(user_id)
        .bind(car_id)
        .bind(location_id)
        .bind(pickup_at)
        .bind(dropoff_at)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .expect("seed booking failed")
    }

    pub async fn booking_status(&self, id: Uuid) -> BookingStatus {
        sqlx::query_scalar::<_, BookingStatus>("SELECT status FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .expect("booking status lookup failed")
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Hit the cron endpoint with an arbitrary bearer value.
    pub async fn run_cron(&self, secret: Option<&str>) -> (Value, StatusCode) {
        let mut req = self.client.get(self.url("/cron/auto-complete"));
        if let Some(secret) = secret {
            req = req.bearer_auth(secret);
        }
        let resp = req.send().await.expect("cron request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let db_name = format!(
        "carbooker_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to the default postgres DB to create the test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        jwt_secret: "test-jwt-secret-that-is-long-enough".to_string(),
        cron_secret: CRON_SECRET.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        base_url: "http://localhost:0".to_string(),
        log_level: "warn".to_string(),
        smtp: None,
    };

    let app = carbooker::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
