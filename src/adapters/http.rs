use crate::core::endpoint::AggregationService;
use crate::core::{Aggregate, DatasetSource};
use crate::utils::error::{MapError, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const DEATHS_ROUTE: &str = "/api/covid-deaths";
pub const HEALTH_ROUTE: &str = "/health";

pub fn router<S>(service: Arc<AggregationService<S>>) -> Router
where
    S: DatasetSource + 'static,
{
    Router::new()
        .route(DEATHS_ROUTE, get(deaths_handler::<S>))
        .route(HEALTH_ROUTE, get(health_handler))
        .with_state(service)
}

pub async fn serve<S>(addr: &str, service: Arc<AggregationService<S>>) -> Result<()>
where
    S: DatasetSource + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}{}", listener.local_addr()?, DEATHS_ROUTE);
    serve_on(listener, service).await
}

pub async fn serve_on<S>(listener: TcpListener, service: Arc<AggregationService<S>>) -> Result<()>
where
    S: DatasetSource + 'static,
{
    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn deaths_handler<S: DatasetSource>(
    State(service): State<Arc<AggregationService<S>>>,
) -> std::result::Result<Json<Aggregate>, MapError> {
    service.deaths_by_province().await.map(Json)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct ApiErrorResponse {
    error: String,
}

impl IntoResponse for MapError {
    fn into_response(self) -> Response {
        tracing::error!("❌ Error fetching or processing COVID data: {}", self);

        let body = Json(ApiErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
