pub mod envelope;
pub mod index;
