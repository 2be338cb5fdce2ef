//! [`Percent`]-related definitions.

use std::ops;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Floating-point percentage of a canvas dimension.
///
/// `0` is the top/left canvas edge and `100` is the bottom/right one. Values
/// are not clamped, so anything outside of `0..=100` overflows the canvas.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    From,
    Into,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    /// [`Percent`] of the canvas origin.
    pub const ZERO: Self = Self(0.0);

    /// [`Percent`] covering the whole canvas dimension.
    pub const FULL: Self = Self(100.0);

    /// Creates a new [`Percent`] out of the provided value.
    #[must_use]
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    /// Returns the raw value of this [`Percent`].
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Indicates whether this [`Percent`] lies within the canvas.
    #[must_use]
    pub fn is_within_canvas(self) -> bool {
        (Self::ZERO..=Self::FULL).contains(&self)
    }
}

impl ops::Add for Percent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
