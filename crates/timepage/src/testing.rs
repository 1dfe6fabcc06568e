use std::net::SocketAddr;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::{HeaderMap, SET_COOKIE};
use timepage_core::{FixedClock, FormatCatalog};
use tokio::net::TcpListener;

use crate::config::Config;

/// A test application for integration testing.
///
/// Spins up the server on a random local port with the clock frozen at
/// [`TestApp::now`].
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_sticky_format() {
///     let app = TestApp::new().await;
///     let res = app.client.get_with_cookie(&app.url("/"), "format=2").await;
///     assert!(res.body.contains("12/01/2020"));
/// }
/// ```
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: TestClient,
    pub config: Config,
}

impl TestApp {
    /// 2020-01-12 13:55:30 UTC, which displays as 14:55 at UTC+1.
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 12, 13, 55, 30)
            .single()
            .expect("valid test instant")
    }

    /// Create a test app with the stock catalog.
    pub async fn new() -> Self {
        Self::with_catalog(FormatCatalog::default()).await
    }

    /// Create a test app serving `catalog`.
    pub async fn with_catalog(catalog: FormatCatalog) -> Self {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 0, // OS assigns a random port
            environment: "test".to_string(),
            ..Config::default()
        };

        let app = crate::App::new(config.clone())
            .with_catalog(catalog)
            .with_clock(FixedClock::new(Self::now()));

        let listener = TcpListener::bind(config.server_addr())
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local addr");

        // Spawn the server in the background
        tokio::spawn(async move {
            app.serve(listener, std::future::pending()).await.unwrap();
        });

        TestApp {
            addr,
            client: TestClient::new(addr),
            config,
        }
    }

    /// Get the full URL for `path` on the test server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// A simple HTTP test client with helper methods.
#[derive(Clone)]
pub struct TestClient {
    inner: reqwest::Client,
    base_addr: SocketAddr,
}

impl TestClient {
    /// Create a new test client pointing at the given address.
    pub fn new(addr: SocketAddr) -> Self {
        TestClient {
            inner: reqwest::Client::new(),
            base_addr: addr,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, url: &str) -> TestResponse {
        let res = self.inner.get(url).send().await.expect("GET request failed");
        TestResponse::from_response(res).await
    }

    /// Send a GET request with a raw `Cookie` header.
    pub async fn get_with_cookie(&self, url: &str, cookie: &str) -> TestResponse {
        let res = self
            .inner
            .get(url)
            .header("Cookie", cookie)
            .send()
            .await
            .expect("GET request failed");
        TestResponse::from_response(res).await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.base_addr)
    }
}

/// A simplified HTTP response for test assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: u16,
    pub body: String,
    pub headers: HeaderMap,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = res.text().await.unwrap_or_default();
        TestResponse {
            status,
            body,
            headers,
        }
    }

    /// Value of a single-valued header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// All `Set-Cookie` header values.
    pub fn set_cookies(&self) -> Vec<&str> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }

    /// Value set for cookie `name` by this response.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.set_cookies().into_iter().find_map(|header| {
            let pair = header.split(';').next()?;
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then(|| value.trim())
        })
    }
}
