use crate::engine::{simulate, EquityRequest, SimulationConfig};

use super::dto::{EquityQueryDto, EquityResponseDto};
use super::errors::ApiError;

/// Выполнить запрос эквити.
pub fn run_query(query: &EquityQueryDto) -> Result<EquityResponseDto, ApiError> {
    let request = EquityRequest::from_strs(&query.hole, &query.board, query.opponents)?;
    let config = SimulationConfig {
        trials: query.trials,
        seed: query.seed,
        ..SimulationConfig::default()
    };
    let result = simulate(&request, &config)?;
    Ok(EquityResponseDto::new(query, &result))
}

/// JSON-вход / JSON-выход для внешних коллабораторов.
pub fn run_query_json(json: &str) -> Result<String, ApiError> {
    let query: EquityQueryDto =
        serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = run_query(&query)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}
