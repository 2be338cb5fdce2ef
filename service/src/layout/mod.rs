//! Rule-based [`Layout`] engine placing [`Product`]s over a room photo.
//!
//! The engine doesn't look at the photo at all: it infers a category of every
//! [`Product`] from keywords in its title (or its category) and draws a
//! bounding box in the region of the canvas where such items usually are.

mod rule;
mod shape;

use std::{hash::Hash as _, sync::Arc};

use rand::{rngs::StdRng, Rng, SeedableRng as _};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3;

use crate::domain::{placement, product, Placement, Product, RoomAnalysis};

pub use self::{
    rule::{Matcher, Rule},
    shape::{Coord, Frame, Shape, Step},
};

/// Ordered list of [`Rule`]s evaluated first-match-wins, with a fallback
/// [`Shape`] for [`Product`]s no [`Rule`] applies to.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// [`Rule`]s in precedence order.
    rules: Vec<Rule>,

    /// [`Shape`] of uncategorized [`Product`]s.
    fallback: Shape,
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl Layout {
    /// Creates a new [`Layout`] without any [`Rule`]s.
    #[must_use]
    pub fn new(fallback: Shape) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Creates the standard furnishing [`Layout`].
    ///
    /// In precedence order:
    /// 1. lighting alternates between the left and the right side;
    /// 2. rugs lie large in the lower half (the floor);
    /// 3. pillows are small and spread horizontally;
    /// 4. wall art and mirrors hang near the top, widely spread;
    /// 5. plants alternate between the two far corners;
    /// 6. anything else goes onto a wrapping grid with a random size.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Shape {
            x: Coord::at(10.0).step(Step::Wrapping {
                step: 20.0,
                modulo: 60.0,
            }),
            y: Coord::at(10.0).step(Step::Wrapping {
                step: 15.0,
                modulo: 40.0,
            }),
            width: Coord::at(12.0).jitter(8.0),
            height: Coord::at(12.0).jitter(8.0),
        })
        .rule(Rule {
            name: "lighting",
            matcher: Matcher::Any(vec![
                Matcher::Title(&["lamp"]),
                Matcher::Category(product::Category::LIGHTING),
            ]),
            shape: Shape {
                x: Coord::at(10.0).step(Step::Alternating(70.0)),
                y: Coord::at(25.0).jitter(10.0),
                width: Coord::at(8.0),
                height: Coord::at(12.0),
            },
        })
        .rule(Rule {
            name: "rug",
            matcher: Matcher::Title(&["rug"]),
            shape: Shape {
                x: Coord::at(25.0).jitter(10.0),
                y: Coord::at(55.0).jitter(10.0),
                width: Coord::at(35.0).jitter(10.0),
                height: Coord::at(20.0).jitter(5.0),
            },
        })
        .rule(Rule {
            name: "pillow",
            matcher: Matcher::Title(&["pillow", "cushion"]),
            shape: Shape {
                x: Coord::at(30.0).step(Step::Linear(8.0)),
                y: Coord::at(40.0).jitter(5.0),
                width: Coord::at(6.0),
                height: Coord::at(6.0),
            },
        })
        .rule(Rule {
            name: "wall art",
            matcher: Matcher::Title(&["art", "mirror"]),
            shape: Shape {
                x: Coord::at(15.0).step(Step::Linear(25.0)),
                y: Coord::at(10.0).jitter(15.0),
                width: Coord::at(12.0),
                height: Coord::at(8.0),
            },
        })
        .rule(Rule {
            name: "plant",
            matcher: Matcher::Title(&["plant"]),
            shape: Shape {
                x: Coord::at(5.0).step(Step::Alternating(80.0)),
                y: Coord::at(30.0).jitter(20.0),
                width: Coord::at(10.0),
                height: Coord::at(15.0),
            },
        })
    }

    /// Appends the provided [`Rule`] to this [`Layout`].
    ///
    /// The [`Rule`] takes precedence over the fallback [`Shape`] only, not
    /// over any of the already present [`Rule`]s.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns [`Rule`]s of this [`Layout`] in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the first [`Rule`] applying to the provided [`Product`].
    ///
    /// [`None`] means the [`Product`] is uncategorized.
    #[must_use]
    pub fn classify(&self, product: &Product) -> Option<&Rule> {
        self.rules.iter().find(|r| r.applies_to(product))
    }

    /// Places the provided [`Product`]s drawing randomness as the provided
    /// [`Randomness`] prescribes.
    #[must_use]
    pub fn place_with(
        &self,
        products: &[Arc<Product>],
        room: &RoomAnalysis,
        randomness: Randomness,
    ) -> Vec<Placement> {
        match randomness {
            Randomness::Entropy => {
                self.place(products, room, &mut rand::thread_rng())
            }
            Randomness::Seeded(seed) => {
                self.place(products, room, &mut StdRng::seed_from_u64(seed))
            }
            Randomness::Keyed(salt) => self.place_keyed(products, room, salt),
        }
    }

    /// Places the provided [`Product`]s, drawing randomness from the
    /// provided `rng`.
    ///
    /// Returns exactly one [`Placement`] per [`Product`], in the same order.
    /// The [`RoomAnalysis`] doesn't affect the result at the moment.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(products = products.len(), room_type = %room.room_type),
    )]
    pub fn place<R: Rng + ?Sized>(
        &self,
        products: &[Arc<Product>],
        room: &RoomAnalysis,
        rng: &mut R,
    ) -> Vec<Placement> {
        products
            .iter()
            .enumerate()
            .map(|(index, product)| self.place_one(index, product, rng))
            .collect()
    }

    /// Places the provided [`Product`]s, drawing randomness from a separate
    /// generator for each of them, seeded by its ID, its index and the
    /// provided `salt`.
    ///
    /// The same [`Product`] at the same index is always placed the same way,
    /// regardless of the other [`Product`]s in the list.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(products = products.len(), room_type = %room.room_type),
    )]
    pub fn place_keyed(
        &self,
        products: &[Arc<Product>],
        room: &RoomAnalysis,
        salt: u64,
    ) -> Vec<Placement> {
        products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let mut rng = StdRng::seed_from_u64(key(salt, &product.id, index));
                self.place_one(index, product, &mut rng)
            })
            .collect()
    }

    /// Places a single [`Product`] located at the provided `index`.
    fn place_one<R: Rng + ?Sized>(
        &self,
        index: usize,
        product: &Arc<Product>,
        rng: &mut R,
    ) -> Placement {
        let shape = self.classify(product).map_or(&self.fallback, |r| &r.shape);
        let Frame {
            x,
            y,
            width,
            height,
        } = shape.draw(index, rng);

        Placement {
            id: placement::Id::of(&product.id),
            product: Arc::clone(product),
            x,
            y,
            width,
            height,
            rotation: None,
        }
    }
}

/// Calculates a seed for the [`Product`] with the provided ID at the provided
/// `index`.
fn key(salt: u64, id: &product::Id, index: usize) -> u64 {
    use std::hash::Hasher as _;

    // WARNING: Changing the order of the hashed values changes every keyed
    //          placement.
    let mut hasher = xxh3::Xxh3Builder::new().with_seed(salt).build();
    id.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}

/// Source of randomness for a [`Layout`].
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Randomness {
    /// Fresh operating system entropy on every call, so repeated calls with
    /// identical input produce different [`Placement`]s.
    #[default]
    Entropy,

    /// Single generator seeded once per call with the provided seed.
    Seeded(u64),

    /// Separate generator per [`Product`], seeded by its ID, its index and
    /// the provided salt.
    Keyed(u64),
}
