use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse},
    routing::get,
};

use crate::error::Result;

use super::schema::{AppState, LaunchpadSchema, execute_with_token};

#[derive(Clone)]
struct ServerState {
    schema: LaunchpadSchema,
    app: Arc<AppState>,
}

async fn graphql_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    execute_with_token(&state.schema, &state.app, req.into_inner(), authorization)
        .await
        .into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn health() -> &'static str {
    "OK"
}

pub fn router(schema: LaunchpadSchema, app: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .with_state(ServerState { schema, app })
}

pub async fn run_server(schema: LaunchpadSchema, app: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "GraphQL server listening");
    axum::serve(listener, router(schema, app)).await?;
    Ok(())
}
