use axum::{extract::Query, Json};
use serde::Serialize;

use crate::classification::{classify, BmiReading, Classification};
use crate::http::response::{ApiError, FieldError};
use crate::observability::metrics;

/// Query parameter holding the reading.
const VALOR: &str = "valor";

#[derive(Debug, Serialize)]
pub struct Index {
    pub mensagem: &'static str,
    pub endpoint: &'static str,
    pub exemplo: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn index() -> Json<Index> {
    Json(Index {
        mensagem: "API de Classificação de IMC",
        endpoint: "/imc?valor=<numero>",
        exemplo: "/imc?valor=25.5",
    })
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /imc?valor=<numero>`. With repeated parameters the last one wins.
pub async fn classify_imc(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Classification>, ApiError> {
    let raw = params
        .iter()
        .rev()
        .find(|(name, _)| name == VALOR)
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| ApiError::Validation(vec![FieldError::missing_query(VALOR)]))?;

    let reading = BmiReading::parse(raw).map_err(|err| {
        tracing::debug!(input = %raw, error = %err, "Rejected reading");
        ApiError::Validation(vec![FieldError::invalid_query(VALOR, raw, err)])
    })?;

    let result = classify(reading);
    metrics::record_classification(result.category);
    tracing::debug!(
        imc = result.bmi,
        classificacao = result.category.label(),
        "Classified reading"
    );

    Ok(Json(result))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
