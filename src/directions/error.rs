use thiserror::Error;

use crate::coord::CoordError;

#[derive(Error, Debug)]
pub enum DirectionsError {
    #[error("directions payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route {route} has no legs")]
    NoLegs { route: usize },

    #[error("route {route}, step {step}, {field}: {source}")]
    Coordinate {
        route: usize,
        step: usize,
        field: &'static str,
        source: CoordError,
    },

    #[error("route {route}, step {step}: {field} value {value} is out of range")]
    InvalidQuantity {
        route: usize,
        step: usize,
        field: &'static str,
        value: i64,
    },
}
