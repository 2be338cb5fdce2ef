//! [`Product`] definitions.

use std::str::FromStr;

use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::Url;

/// Purchasable item found by a product search.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// ID of this [`Product`].
    pub id: Id,

    /// [`Title`] of this [`Product`].
    pub title: Title,

    /// [`Price`] of this [`Product`].
    pub price: Price,

    /// [`Url`] to purchase this [`Product`] at.
    pub url: Url,

    /// [`Url`] of this [`Product`] thumbnail.
    pub image_url: Url,

    /// Description of this [`Product`], if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Brand of this [`Product`], if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// [`Category`] of this [`Product`], if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// ID of a [`Product`].
///
/// Unique within a single list of [`Product`]s.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(into = "String", try_from = "String")]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `id` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`Id`].
    fn check(id: impl AsRef<str>) -> bool {
        !id.as_ref().is_empty()
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `product::Id`")
    }
}

impl TryFrom<String> for Id {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("`product::Id` must not be empty")
    }
}

/// Display name of a [`Product`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(into = "String", try_from = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` contains at least one
    /// non-whitespace character.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        !title.as_ref().trim().is_empty()
    }

    /// Indicates whether this [`Title`] contains any of the provided
    /// lowercase `keywords`, ignoring case.
    #[must_use]
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        let title = self.0.to_lowercase();
        keywords.iter().any(|k| title.contains(k))
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

impl TryFrom<String> for Title {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("`Title` must not be empty")
    }
}

/// Formatted price of a [`Product`], like `$89.99`.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Placeholder [`Price`] of a [`Product`] whose price is unknown.
    pub const UNKNOWN: &'static str = "$0.00";

    /// Creates a new [`Price`].
    #[must_use]
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }

    /// Indicates whether this [`Price`] is the [`Price::UNKNOWN`]
    /// placeholder.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

/// Free-text category of a [`Product`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// [`Category`] of lighting [`Product`]s.
    pub const LIGHTING: &'static str = "lighting";

    /// [`Category`] of furniture [`Product`]s.
    pub const FURNITURE: &'static str = "furniture";

    /// [`Category`] of decor [`Product`]s.
    pub const DECOR: &'static str = "decor";

    /// Creates a new [`Category`].
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }
}
