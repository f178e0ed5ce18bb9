//! Half-open sampling ranges.
//!
//! Every randomized field of a fixture is drawn uniformly from a
//! `[min, max)` range that can be overridden in the configuration file.

use std::fmt::Display;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Value types a [`ValueRange`] can sample.
///
/// Beyond ordering, a bound must leave the sampler a finite span to work
/// with: floats reject infinities and widths that overflow `f64`.
pub trait RangeBound: SampleUniform + PartialOrd + Copy + Display {
    /// Why `[min, max)` cannot be sampled, or `None` if it can
    fn span_problem(min: Self, max: Self) -> Option<&'static str>;
}

impl RangeBound for i32 {
    fn span_problem(_min: Self, _max: Self) -> Option<&'static str> {
        None
    }
}

impl RangeBound for f64 {
    fn span_problem(min: Self, max: Self) -> Option<&'static str> {
        if !min.is_finite() || !max.is_finite() {
            Some("bounds must be finite")
        } else if !(max - min).is_finite() {
            Some("range width overflows f64")
        } else {
            None
        }
    }
}

/// Uniform sampling bounds, `min` inclusive and `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> ValueRange<T>
where
    T: RangeBound,
{
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Draw one value from `[min, max)`.
    ///
    /// The range must have passed [`ValueRange::validate`]; an empty range
    /// makes the underlying sampler panic.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        rng.gen_range(self.min..self.max)
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value < self.max
    }

    /// Reject ranges the sampler cannot draw from, naming the offending field
    pub fn validate(&self, field: &str) -> Result<(), GeneratorError> {
        // NaN bounds fail this comparison too
        let problem = if self.min < self.max {
            T::span_problem(self.min, self.max)
        } else {
            Some("min must be below max")
        };

        match problem {
            None => Ok(()),
            Some(reason) => Err(GeneratorError::InvalidRange {
                field: field.to_string(),
                min: self.min.to_string(),
                max: self.max.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}
