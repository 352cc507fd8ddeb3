use thiserror::Error;

use crate::coord::CoordError;
use crate::directions::DirectionsError;
use crate::route::RouteError;

/// Crate-wide error, wrapping each submodule's error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Directions(#[from] DirectionsError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type Result<T> = std::result::Result<T, Error>;
