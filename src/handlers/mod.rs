pub mod health;
pub mod login;
pub mod resources;

use axum::{body::Bytes, routing::any, Router};
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::repository::{AdvisorRepository, ListingRepository, UserRepository};
use crate::service::{CatalogService, LoginService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub login: LoginService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            catalog: CatalogService::new(
                ListingRepository::new(pool.clone()),
                AdvisorRepository::new(pool.clone()),
            ),
            login: LoginService::new(UserRepository::new(pool)),
        }
    }
}

/// Any path prefix is accepted; the last segment picks the resource.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .route("/{*path}", any(resources::dispatch))
        .fallback(resources::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}
