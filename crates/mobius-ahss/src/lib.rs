//! Atiyah–Hirzebruch E2-diagonal rank sums for Pin+ bordism, the decade
//! index, and the vacuum density prediction derived from it.

pub mod index;
pub mod report;
pub mod tables;

pub use index::{agreement_decades, decade_index, predict_density, PhysicalInputs};
pub use report::{e2_rank_sum, sensitivity_scan, verify_index, E2Breakdown, E2Panel, IndexReport, SensitivityRow};
pub use tables::AhssInputs;
