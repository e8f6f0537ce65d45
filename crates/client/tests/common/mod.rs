#![allow(dead_code)]

use std::sync::Arc;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_client::{Mirror, TodoApi};
use todo_store::Store;

/// Serve the real router over a seeded store on an ephemeral port and
/// return its base URL.
pub async fn spawn_server() -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    };
    let state = AppState {
        store: Store::seeded(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

pub async fn api() -> TodoApi {
    TodoApi::new(spawn_server().await)
}

pub async fn mirror() -> Mirror {
    Mirror::new(api().await)
}

/// Id of the seeded category called `name`.
pub async fn category_id(api: &TodoApi, name: &str) -> String {
    api.list_categories()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.id.to_string())
        .unwrap()
}
