//! [`Shape`] of a bounding box drawn by a layout rule.

use common::Percent;
use rand::Rng;

/// Bounding box on a room canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Left edge of this [`Frame`].
    pub x: Percent,

    /// Top edge of this [`Frame`].
    pub y: Percent,

    /// Width of this [`Frame`].
    pub width: Percent,

    /// Height of this [`Frame`].
    pub height: Percent,
}

/// Recipe of a [`Frame`] for a product at some index of a product list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// [`Coord`] of the left edge.
    pub x: Coord,

    /// [`Coord`] of the top edge.
    pub y: Coord,

    /// [`Coord`] of the width.
    pub width: Coord,

    /// [`Coord`] of the height.
    pub height: Coord,
}

impl Shape {
    /// Draws a [`Frame`] of this [`Shape`] for the product at the provided
    /// `index`.
    ///
    /// Coordinates are resolved in `x`, `y`, `width`, `height` order, so the
    /// same `rng` state always produces the same [`Frame`].
    pub fn draw<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Frame {
        Frame {
            x: self.x.resolve(index, rng),
            y: self.y.resolve(index, rng),
            width: self.width.resolve(index, rng),
            height: self.height.resolve(index, rng),
        }
    }
}

/// Single coordinate of a [`Shape`].
///
/// Resolves to `base + step(index) + jitter`, where the jitter is drawn
/// uniformly from `[0, jitter)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    /// Base value.
    base: f64,

    /// [`Step`] along the product index.
    step: Step,

    /// Upper bound (exclusive) of the random offset.
    jitter: f64,
}

impl Coord {
    /// Creates a new fixed [`Coord`] at the provided `base`.
    #[must_use]
    pub const fn at(base: f64) -> Self {
        Self {
            base,
            step: Step::Fixed,
            jitter: 0.0,
        }
    }

    /// Makes this [`Coord`] progress along the product index.
    #[must_use]
    pub const fn step(mut self, step: Step) -> Self {
        self.step = step;
        self
    }

    /// Adds a random offset in `[0, jitter)` to this [`Coord`].
    #[must_use]
    pub const fn jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Indicates whether this [`Coord`] consumes randomness.
    #[must_use]
    pub fn is_random(&self) -> bool {
        self.jitter > 0.0
    }

    /// Resolves this [`Coord`] for the product at the provided `index`.
    pub fn resolve<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Percent {
        let offset = if self.is_random() {
            rng.gen::<f64>() * self.jitter
        } else {
            0.0
        };
        Percent::new(self.base + self.step.offset(index) + offset)
    }
}

/// Progression of a [`Coord`] along the index of a product in its list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Doesn't depend on the index.
    Fixed,

    /// Moves by `step` for every index: `index * step`.
    Linear(f64),

    /// Alternates between two positions: `(index mod 2) * step`.
    Alternating(f64),

    /// Moves by `step` for every index, wrapping around `modulo`:
    /// `(index * step) mod modulo`.
    Wrapping {
        /// Distance between neighbour indices.
        step: f64,

        /// Length of the range to wrap around.
        modulo: f64,
    },
}

impl Step {
    /// Returns the offset of this [`Step`] at the provided `index`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "product lists are nowhere near 2^52 items"
    )]
    #[must_use]
    pub fn offset(self, index: usize) -> f64 {
        let index = index as f64;
        match self {
            Self::Fixed => 0.0,
            Self::Linear(step) => index * step,
            Self::Alternating(step) => (index % 2.0) * step,
            Self::Wrapping { step, modulo } => (index * step) % modulo,
        }
    }
}
