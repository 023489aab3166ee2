use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, info, spotify::SpotifyCatalog};

pub fn router(catalog: SpotifyCatalog) -> Router {
    Router::new()
        .route("/", get(api::form))
        .route("/health", get(api::health))
        .route("/recommendations", post(api::recommendations))
        .layer(Extension(Arc::new(catalog)))
}

pub async fn start_api_server(addr: &str, catalog: SpotifyCatalog) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving the recommendation form on http://{}", addr);
    axum::serve(listener, router(catalog)).await?;
    Ok(())
}
