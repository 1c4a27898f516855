//! HTTP transport for the GraphQL schema

use crate::error::{Result, SnowtoothError};

use async_graphql::dynamic::Schema;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the router with the GraphQL endpoint, the playground and a health check
pub fn build_router(schema: Schema) -> Router {
    // Wrap schema in Arc for sharing across handlers
    let schema = Arc::new(schema);

    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `bind:port` and serve until Ctrl+C
pub async fn serve(schema: Schema, bind: &str, port: u16) -> Result<()> {
    let app = build_router(schema);

    let listener = tokio::net::TcpListener::bind((bind, port))
        .await
        .map_err(|e| {
            SnowtoothError::Server(format!(
                "Failed to bind to {}:{}: {}. Port may be in use.",
                bind, port, e
            ))
        })?;

    let addr = listener.local_addr()?;
    tracing::info!("🚀 GraphQL server running on http://{}/graphql", addr);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SnowtoothError::Server(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

async fn graphql_handler(State(schema): State<Arc<Schema>>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphql_playground() -> Html<String> {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
