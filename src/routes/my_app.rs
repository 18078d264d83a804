use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
    Json,
};

use super::{ALLOW_METHODS, PREFLIGHT_ALLOW_HEADERS};
use crate::apps::{self, QueryParams};
use crate::error::ApiError;
use crate::eth::UnsignedTx;
use crate::metadata::{self, ValidatedMetadata};
use crate::state::AppState;
use crate::types::ExecutionResponse;

pub async fn get_metadata(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ValidatedMetadata>, ApiError> {
    let config = &state.config;
    let base_url = metadata::base_url(&headers, &config.default_protocol, &config.default_host);

    let document = apps::metadata(config.mini_app, &config.chain, base_url);
    let validated = metadata::validate(document)?;

    Ok(Json(validated))
}

pub async fn build_transaction(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ExecutionResponse>, ApiError> {
    let config = &state.config;

    let data = apps::encode_call(config.mini_app, &state.contract, &params)?;
    let tx = UnsignedTx {
        to: state.contract.address(),
        data,
        chain_id: config.chain.id,
    };
    let serialized_transaction = tx.serialize(config.tx_encoding)?;

    tracing::info!(
        app = ?config.mini_app,
        chain_id = config.chain.id,
        "built unsigned transaction"
    );

    Ok(Json(ExecutionResponse {
        serialized_transaction,
        chain_id: config.chain.name.to_string(),
    }))
}

pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOW_METHODS),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(PREFLIGHT_ALLOW_HEADERS),
            ),
        ],
    )
}
