#![deny(missing_docs)]
#![doc = "Shared error types and numeric policies for the Möbius verification crates."]

pub mod errors;
pub mod numeric;

pub use errors::{ErrorInfo, MobiusError};
pub use numeric::{half_ratio, round_value, RATIO_DENOMINATOR_FLOOR};
