//! Shared utilities: sampling ranges.

pub mod range;

pub use range::ValueRange;
