/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::DimensionKind;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Quantity parse error: {0}")]
    ParseError(String),
    #[error("unknown {0} unit: {1}")]
    UnknownScale(DimensionKind, String),
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for UnitError {
    fn from(err: serde_json::Error) -> Self {
        UnitError::Json(err.to_string())
    }
}
