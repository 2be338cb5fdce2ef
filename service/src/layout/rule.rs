//! Layout [`Rule`] definitions.

use crate::domain::Product;

use super::Shape;

/// Category rule of a [`Layout`]: [`Product`]s recognized by its [`Matcher`]
/// are drawn with its [`Shape`].
///
/// [`Layout`]: super::Layout
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// Human-readable name of this [`Rule`].
    pub name: &'static str,

    /// [`Matcher`] recognizing the [`Product`]s of this [`Rule`].
    pub matcher: Matcher,

    /// [`Shape`] of the [`Product`]s of this [`Rule`].
    pub shape: Shape,
}

impl Rule {
    /// Indicates whether this [`Rule`] applies to the provided [`Product`].
    #[must_use]
    pub fn applies_to(&self, product: &Product) -> bool {
        self.matcher.matches(product)
    }
}

/// Predicate recognizing [`Product`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Matcher {
    /// [`Product::title`] contains any of the lowercase keywords, ignoring
    /// case.
    Title(&'static [&'static str]),

    /// [`Product::category`] equals exactly to the provided one.
    Category(&'static str),

    /// Any of the [`Matcher`]s matches.
    Any(Vec<Matcher>),
}

impl Matcher {
    /// Indicates whether this [`Matcher`] recognizes the provided
    /// [`Product`].
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Title(keywords) => product.title.mentions(keywords),
            Self::Category(category) => product
                .category
                .as_ref()
                .is_some_and(|c| AsRef::<str>::as_ref(c) == *category),
            Self::Any(matchers) => matchers.iter().any(|m| m.matches(product)),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Matcher;
    use crate::domain::{product, Product, Url};

    fn product(title: &str, category: Option<&str>) -> Product {
        Product {
            id: product::Id::new("1").unwrap(),
            title: product::Title::new(title).unwrap(),
            price: product::Price::new("$1.00"),
            url: Url::new("https://example.com"),
            image_url: Url::new("https://example.com/1.jpg"),
            description: None,
            brand: None,
            category: category.map(product::Category::new),
        }
    }

    #[test]
    fn matches_title_keywords_ignoring_case() {
        let m = Matcher::Title(&["pillow", "cushion"]);

        assert!(m.matches(&product("Velvet CUSHION", None)));
        assert!(m.matches(&product("Throw Pillows", None)));
        assert!(!m.matches(&product("Area Rug", None)));
    }

    #[test]
    fn matches_category_exactly() {
        let m = Matcher::Category("lighting");

        assert!(m.matches(&product("Pendant", Some("lighting"))));
        assert!(!m.matches(&product("Pendant", Some("Lighting"))));
        assert!(!m.matches(&product("Pendant", None)));
    }

    #[test]
    fn matches_any() {
        let m = Matcher::Any(vec![
            Matcher::Title(&["lamp"]),
            Matcher::Category("lighting"),
        ]);

        assert!(m.matches(&product("Floor Lamp", Some("decor"))));
        assert!(m.matches(&product("Pendant", Some("lighting"))));
        assert!(!m.matches(&product("Pendant", Some("decor"))));
        assert!(!Matcher::Any(vec![]).matches(&product("Lamp", None)));
    }
}
