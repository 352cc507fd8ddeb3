use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use geo::Point;
use serde::{Deserialize, Deserializer, Serialize};

use crate::coord::error::CoordError;

pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair identifying a graph node.
///
/// Two coordinates are the *same node* only when both components are
/// exactly equal. Identity is implemented over the raw `f64` bit
/// patterns, with `-0.0` folded into `0.0` at construction so that bit
/// identity and float `==` agree for every value the directions
/// boundary admits (non-finite components are rejected there, see
/// [`LatLng::from_degrees`]).
///
/// ```rust
/// use rutas::coord::LatLng;
/// let latlng = LatLng::new(-12.0464, -77.0428);
/// println!("Position: {:?}", latlng);
/// ```
#[derive(Clone, Copy, Serialize)]
pub struct LatLng {
    lat: Degree,
    lng: Degree,
}

impl LatLng {
    /// Constructs a new `LatLng` from a given `lat` and `lng`, without
    /// range validation. Callers feeding untrusted values should go
    /// through [`LatLng::from_degrees`] instead.
    pub fn new(lat: Degree, lng: Degree) -> Self {
        LatLng {
            lat: fold_zero(lat),
            lng: fold_zero(lng),
        }
    }

    /// Range-validated constructor. Non-finite components fail the same
    /// comparisons the bounds do, so NaN and the infinities are rejected
    /// here too.
    pub fn from_degrees(lat: Degree, lng: Degree) -> Result<Self, CoordError> {
        if !(lat > -90f64 && lat < 90f64) {
            return Err(CoordError::InvalidCoordinate(format!(
                "Latitude must be greater than -90 and less than 90. Given: {}",
                lat
            )));
        }

        if !(lng > -180f64 && lng < 180f64) {
            return Err(CoordError::InvalidCoordinate(format!(
                "Longitude must be greater than -180 and less than 180. Given: {}",
                lng
            )));
        }

        Ok(Self::new(lat, lng))
    }

    pub fn lat(&self) -> Degree {
        self.lat
    }

    pub fn lng(&self) -> Degree {
        self.lng
    }

    /// Returns a `(lng, lat)` pair.
    pub fn expand(&self) -> (Degree, Degree) {
        (self.lng, self.lat)
    }

    /// Converts into a GeoRust point, `x = lng`, `y = lat`.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    /// Bit-level identity key. Equality, ordering and hashing all go
    /// through this so the three stay consistent with one another.
    fn key(&self) -> (u64, u64) {
        (self.lat.to_bits(), self.lng.to_bits())
    }
}

// The graph keys nodes by `LatLng`, which requires a total order and a
// hash that agree with equality. Bit ordering is not geographic order;
// it only has to be consistent.
impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for LatLng {}

impl PartialOrd for LatLng {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LatLng {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for LatLng {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(Degree, Degree)> for LatLng {
    /// Format is: (Lat, Lng)
    fn from((lat, lng): (Degree, Degree)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        value.point()
    }
}

// Deserialization routes through `new` so the `-0.0` normalisation
// cannot be bypassed by decoded payloads.
impl<'de> Deserialize<'de> for LatLng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            lat: Degree,
            lng: Degree,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(LatLng::new(raw.lat, raw.lng))
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}

fn fold_zero(value: Degree) -> Degree {
    if value == 0.0 { 0.0 } else { value }
}
