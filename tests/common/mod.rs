#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use contact_relay::config::{Config, CorsOrigins, EmailConfig};
use contact_relay::db::SubmissionStore;
use contact_relay::email::Notifier;
use contact_relay::error::NotificationError;
use contact_relay::models::Submission;
use contact_relay::state::AppState;

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: Option<PgPool>,
    pub db_name: Option<String>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the intake endpoint, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET the stored submissions, return (body, status).
    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/contact"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn valid_form() -> Value {
    json!({
        "name": "Test User",
        "email": "test@example.com",
        "company": "Test Co",
        "message": "Hello",
    })
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        database_name: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        site_name: "Test Site".to_string(),
        max_body_size: 16 * 1024,
        cors_origins: CorsOrigins::Any,
        log_level: "warn".to_string(),
        email: EmailConfig::disabled(),
    }
}

// ── In-memory collaborators ─────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    pub rows: Mutex<Vec<Submission>>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn seeded(rows: Vec<Submission>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail: false,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, submission: &Submission) -> Result<Submission, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolClosed);
        }
        self.rows.lock().unwrap().push(submission.clone());
        Ok(submission.clone())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Submission>, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolClosed);
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().take(limit as usize).cloned().collect())
    }
}

/// Records every submission it is asked to deliver; optionally fails each attempt.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Uuid>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Uuid> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, submission: &Submission) -> Result<Option<String>, NotificationError> {
        self.sent.lock().unwrap().push(submission.id);
        if self.fail {
            return Err(NotificationError::from("provider unavailable"));
        }
        Ok(Some(format!("msg-{}", submission.id)))
    }
}

// ── Spawning ────────────────────────────────────────────────────

async fn serve(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

/// Spawn the router over injected collaborators, no database involved.
pub async fn spawn_with(
    config: Config,
    store: Arc<dyn SubmissionStore>,
    notifier: Option<Arc<dyn Notifier>>,
) -> TestApp {
    let state = Arc::new(AppState {
        config,
        store,
        notifier,
    });
    let addr = serve(contact_relay::router(state)).await;

    TestApp {
        addr,
        client: client(),
        pool: None,
        db_name: None,
    }
}

/// Spawn the full app against a fresh temporary database.
pub async fn spawn_pg_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("contact_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&sibling_url(&base_url, "postgres"))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = sibling_url(&base_url, &db_name);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let app = contact_relay::build_app(pool.clone(), test_config(&test_url));
    let addr = serve(app).await;

    TestApp {
        addr,
        client: client(),
        pool: Some(pool),
        db_name: Some(db_name),
    }
}

/// Drop the test database after a test completes.
pub async fn cleanup(app: TestApp) {
    let (Some(pool), Some(db_name)) = (app.pool, app.db_name) else {
        return;
    };
    pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&sibling_url(&base_url, "postgres"))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

fn sibling_url(base_url: &str, db_name: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.to_string())
}
