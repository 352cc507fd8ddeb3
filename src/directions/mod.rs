//! Boundary model for a directions service response. The decoder turns
//! the raw alternatives payload into validated [`Step`] records; nothing
//! past this module touches the wire shape.

#[doc(hidden)]
pub mod decode;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod step;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use decode::decode_alternatives;
#[doc(inline)]
pub use error::DirectionsError;
#[doc(inline)]
pub use output::{format_distance, format_duration};
#[doc(inline)]
pub use step::{Alternative, Step};
