use serde::{Deserialize, Serialize};

use crate::engine::EquityError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильный формат запроса (например, битый JSON).
    BadRequest(String),

    /// Карты или параметры не проходят проверку.
    InvalidInput(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EquityError> for ApiError {
    fn from(err: EquityError) -> Self {
        match err {
            EquityError::Config(_) => ApiError::BadRequest(err.to_string()),
            // Оценщик получает только проверенные руки.
            EquityError::InvalidHand(_) => ApiError::Internal(err.to_string()),
            _ => ApiError::InvalidInput(err.to_string()),
        }
    }
}
