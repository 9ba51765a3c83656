use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::{format_es_cl, Conversion, UsdClpConverter};

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct ConversionView {
    pub dollars: f64,
    pub pesos: f64,
    pub rate: f64,
    pub dollars_display: String,
    pub pesos_display: String,
    pub summary: String,
}

impl From<Conversion> for ConversionView {
    fn from(conversion: Conversion) -> Self {
        Self {
            dollars: conversion.dollars,
            pesos: conversion.pesos,
            rate: conversion.rate,
            dollars_display: format_es_cl(conversion.dollars),
            pesos_display: format_es_cl(conversion.pesos),
            summary: conversion.summary(),
        }
    }
}

/// Router builder exposing the dollar to peso converter.
pub fn currency_router(converter: Arc<UsdClpConverter>) -> Router {
    Router::new()
        .route("/api/v1/currency/usd-clp", post(convert_handler))
        .with_state(converter)
}

pub(crate) async fn convert_handler(
    State(converter): State<Arc<UsdClpConverter>>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    match converter.convert_text(&request.amount) {
        Ok(conversion) => {
            info!(
                dollars = conversion.dollars,
                pesos = conversion.pesos,
                "usd to clp conversion"
            );
            (StatusCode::OK, Json(ConversionView::from(conversion))).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected conversion request");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
