#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod latlng;

#[doc(inline)]
pub use error::CoordError;
#[doc(inline)]
pub use latlng::LatLng;
