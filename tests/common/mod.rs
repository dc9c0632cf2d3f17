#![allow(dead_code)]

use affiliate_tracker::domain::repositories::StoreHealth;
use affiliate_tracker::infrastructure::persistence::{
    MemoryClickRepository, MemoryLinkRepository, MemoryStore,
};
use affiliate_tracker::routes::app_router;
use affiliate_tracker::state::{AppState, StoreSettings};
use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const PEER_IP: &str = "127.0.0.1";

pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<MemoryLinkRepository>,
    pub clicks: Arc<MemoryClickRepository>,
}

pub fn create_test_state(
    links: Arc<MemoryLinkRepository>,
    clicks: Arc<MemoryClickRepository>,
    store_health: Arc<dyn StoreHealth>,
    behind_proxy: bool,
) -> AppState {
    AppState::new(
        links,
        clicks,
        store_health,
        StoreSettings {
            database_url_set: true,
            database_name_set: true,
        },
        behind_proxy,
    )
}

/// Full router over in-memory repositories, with a fixed peer address.
pub fn create_test_app() -> TestApp {
    build_app(false, true)
}

/// Full router that trusts proxy headers for the client IP.
pub fn create_proxied_test_app() -> TestApp {
    build_app(true, true)
}

/// Full router without any peer address information.
pub fn create_test_app_without_peer() -> TestApp {
    build_app(false, false)
}

fn build_app(behind_proxy: bool, with_peer: bool) -> TestApp {
    let links = Arc::new(MemoryLinkRepository::new());
    let clicks = Arc::new(MemoryClickRepository::new());
    let state = create_test_state(
        links.clone(),
        clicks.clone(),
        Arc::new(MemoryStore),
        behind_proxy,
    );

    let app: Router = if with_peer {
        app_router(state).layer(MockConnectInfoLayer)
    } else {
        app_router(state)
    };

    TestApp {
        server: TestServer::new(app).unwrap(),
        links,
        clicks,
    }
}

pub fn shoes_link() -> Value {
    json!({
        "title": "Shoes",
        "url": "https://merchant.example/shoes",
        "code": "shoes1"
    })
}

pub fn link_with_tags(code: &str, tags: &[&str]) -> Value {
    json!({
        "title": format!("Offer {code}"),
        "url": format!("https://merchant.example/{code}"),
        "code": code,
        "tags": tags,
    })
}

/// Registers a link through the API and returns its id.
pub async fn register(server: &TestServer, body: &Value) -> String {
    let response = server.post("/api/links").json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

/// Injects a fixed `ConnectInfo` as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
