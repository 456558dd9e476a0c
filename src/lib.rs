pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

// Export store types
pub use store::{find_by_id, Dataset, DatasetError};

use axum::extract::Request;
use axum::ServiceExt;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Wire the application to an immutable dataset snapshot.
pub fn build_app(dataset: Dataset) -> api::routes::App {
    api::routes::create_app(Arc::new(dataset))
}

/// Serve `dataset` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, dataset: Dataset) -> anyhow::Result<()> {
    // Path rewriting wraps the router, so it is served as a plain service
    let app = ServiceExt::<Request>::into_make_service(build_app(dataset));
    axum::serve(listener, app).await?;
    Ok(())
}
