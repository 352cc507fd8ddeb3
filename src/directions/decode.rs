//! Raw wire types for the directions-alternatives payload and their
//! validation into the crate's [`Step`]/[`Alternative`] model.
//!
//! The shape mirrors what a directions service returns for one origin /
//! destination query with alternatives enabled:
//!
//! ```text
//! { "routes": [ { "legs": [ { "steps": [
//!     { "start_location": { "lat", "lng" },
//!       "end_location":   { "lat", "lng" },
//!       "distance": { "value", "text" },
//!       "duration": { "value", "text" },
//!       "html_instructions": "..." } ] } ] } ] }
//! ```
//!
//! Only the first leg of each route is read. Routes with intermediate
//! waypoints carry their later legs here too; those are dropped with a
//! warning rather than merged, a known scope limitation.

use log::{debug, warn};
use serde::Deserialize;

use crate::coord::LatLng;
use crate::directions::error::DirectionsError;
use crate::directions::step::{Alternative, Step};

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    start_location: RawLocation,
    end_location: RawLocation,
    distance: RawQuantity,
    duration: RawQuantity,
    #[serde(default)]
    html_instructions: String,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct RawQuantity {
    value: i64,
    #[serde(default)]
    text: String,
}

/// Decodes and validates a directions-alternatives payload.
///
/// Every malformed record is rejected here, before it can reach the
/// graph builder: missing required fields and type mismatches surface as
/// [`DirectionsError::Json`], a route without legs as
/// [`DirectionsError::NoLegs`], out-of-range or non-finite coordinates
/// as [`DirectionsError::Coordinate`], and negative or oversized
/// distance/duration values as [`DirectionsError::InvalidQuantity`].
pub fn decode_alternatives(payload: &str) -> crate::Result<Vec<Alternative>> {
    let raw: RawResponse = serde_json::from_str(payload).map_err(DirectionsError::Json)?;

    let mut alternatives = Vec::with_capacity(raw.routes.len());
    for (route, entry) in raw.routes.into_iter().enumerate() {
        let mut legs = entry.legs.into_iter();
        let Some(leg) = legs.next() else {
            return Err(DirectionsError::NoLegs { route }.into());
        };

        if legs.len() > 0 {
            warn!(
                "route {}: dropping {} extra leg(s), only the first leg is read",
                route,
                legs.len()
            );
        }

        let mut steps = Vec::with_capacity(leg.steps.len());
        for (index, step) in leg.steps.into_iter().enumerate() {
            steps.push(validate_step(route, index, step)?);
        }

        debug!("route {}: decoded {} step(s)", route, steps.len());
        alternatives.push(Alternative::new(steps));
    }

    Ok(alternatives)
}

fn validate_step(route: usize, step: usize, raw: RawStep) -> Result<Step, DirectionsError> {
    let start = location(route, step, "start_location", &raw.start_location)?;
    let end = location(route, step, "end_location", &raw.end_location)?;
    let distance = quantity(route, step, "distance", raw.distance.value)?;
    let duration = quantity(route, step, "duration", raw.duration.value)?;

    Ok(Step {
        start,
        end,
        distance,
        duration,
        instruction: raw.html_instructions,
        distance_text: raw.distance.text,
        duration_text: raw.duration.text,
    })
}

fn location(
    route: usize,
    step: usize,
    field: &'static str,
    raw: &RawLocation,
) -> Result<LatLng, DirectionsError> {
    LatLng::from_degrees(raw.lat, raw.lng).map_err(|source| DirectionsError::Coordinate {
        route,
        step,
        field,
        source,
    })
}

fn quantity(
    route: usize,
    step: usize,
    field: &'static str,
    value: i64,
) -> Result<u32, DirectionsError> {
    u32::try_from(value).map_err(|_| DirectionsError::InvalidQuantity {
        route,
        step,
        field,
        value,
    })
}
