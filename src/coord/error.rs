use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}
