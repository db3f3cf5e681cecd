//! Heat-kernel envelope normalization: Seeley–DeWitt coefficients on the
//! unit-round S^3 / RP^3 pair, parity-projected differences, the series
//! model for the envelope ratio, and the spectral target constants.

pub mod fields;
pub mod geometry;
pub mod kernel;
pub mod report;
pub mod series;
pub mod spectral;

pub use fields::{field_coefficients, parity_difference, FieldKind, HeatCoefficients};
pub use geometry::Geometry;
pub use kernel::{kernel_scan, odd_winding_kernel, KernelSample, KernelSpec};
pub use report::{analyze_envelope, EnvelopeOpts, EnvelopeReport, ManifoldCoefficients, SeriesPoint};
pub use series::{series_ratio, SeriesCoeffs};
pub use spectral::{spectral_target, SpectralTarget, DEFAULT_ALPHA_INVERSE};
