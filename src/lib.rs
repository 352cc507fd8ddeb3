#![doc = include_str!("../README.md")]

pub mod coord;
pub mod directions;
pub mod error;
pub mod route;

pub use coord::LatLng;
pub use error::{Error, Result};
pub use route::*;
