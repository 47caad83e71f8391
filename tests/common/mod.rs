//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;
use axum::Router;
use meals_frontend::lifecycle::{launch, Shutdown};
use meals_frontend::FrontendConfig;
use tokio::net::TcpListener;

/// Start a mock backend serving `router` on an ephemeral port.
pub async fn start_mock_backend(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    addr
}

/// A running frontend pointed at a mock backend.
pub struct Frontend {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl Frontend {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Frontend {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the frontend against `backend_addr`.
pub async fn start_frontend(backend_addr: SocketAddr) -> Frontend {
    start_frontend_with(backend_addr, |_| {}).await
}

/// Start the frontend, letting the caller adjust its configuration first.
pub async fn start_frontend_with<F>(backend_addr: SocketAddr, configure: F) -> Frontend
where
    F: FnOnce(&mut FrontendConfig),
{
    let mut config = FrontendConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.backend.base_url = format!("http://{}", backend_addr);
    configure(&mut config);

    let shutdown = Shutdown::new();
    let running = launch(config, &shutdown).await.unwrap();

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap();

    Frontend {
        addr: running.local_addr,
        shutdown,
        client,
    }
}

/// Records the `Cookie` header of every request a mock backend sees.
#[derive(Clone, Default)]
pub struct CookieLog(Arc<Mutex<Vec<Option<String>>>>);

impl CookieLog {
    pub fn record(&self, headers: &HeaderMap) {
        let cookie = headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.0.lock().unwrap().push(cookie);
    }

    pub fn seen(&self) -> Vec<Option<String>> {
        self.0.lock().unwrap().clone()
    }
}

/// Records the raw body of every request a mock backend sees.
#[derive(Clone, Default)]
pub struct BodyLog(Arc<Mutex<Vec<String>>>);

impl BodyLog {
    pub fn record(&self, body: &[u8]) {
        self.0
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(body).into_owned());
    }

    pub fn seen(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
