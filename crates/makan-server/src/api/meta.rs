use axum::{extract::State, Json};
use serde::Serialize;

use super::AppState;

/// Payload for `GET /`: the service version, the upstream it proxies, and the
/// routes it exposes.
#[derive(Debug, Serialize)]
pub(super) struct ServiceInfo {
    version: &'static str,
    url: String,
    path: [&'static str; 3],
}

pub(super) async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        version: env!("CARGO_PKG_VERSION"),
        url: state.config.gofood_base_url.clone(),
        path: ["random", "intel", "merchant/:id"],
    })
}
