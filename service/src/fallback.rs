//! Deterministic datasets substituted for the results of failed external
//! collaborators.

use crate::domain::{
    product, room::Size, search::Query, Product, RoomAnalysis, Url,
};

pub mod photo {
    //! Stock photo IDs used as [`Product`] thumbnails.
    //!
    //! [`Product`]: crate::domain::Product

    /// Table lamp.
    pub const LAMP: &str = "photo-1507003211169-0a1dd7228f2d";

    /// Throw pillows.
    pub const PILLOW: &str = "photo-1586023492125-27b2c045efd7";

    /// Area rug.
    pub const RUG: &str = "photo-1506439773649-6e0eb8cfb237";

    /// Wall art.
    pub const ART: &str = "photo-1541961017774-22349e4a1262";

    /// Potted plant.
    pub const PLANT: &str = "photo-1416879595882-3373a0480b5b";

    /// Anything else.
    pub const DEFAULT: &str = PILLOW;
}

/// Returns the [`RoomAnalysis`] of a typical modern living room.
#[must_use]
pub fn room_analysis() -> RoomAnalysis {
    RoomAnalysis {
        room_type: "living room".to_owned(),
        style: "modern".to_owned(),
        colors: ["white", "gray", "beige"].map(String::from).to_vec(),
        lighting: "natural".to_owned(),
        size: Size::Medium,
        existing_furniture: ["sofa", "coffee table"].map(String::from).to_vec(),
        recommendations: [
            "Add accent lighting with table lamps",
            "Include throw pillows for color",
            "Consider a area rug to define the space",
            "Add wall art or decorative mirrors",
            "Include plants for natural elements",
        ]
        .map(String::from)
        .to_vec(),
    }
}

/// Returns the default [`Product`] recommendations.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Modern Table Lamp",
            "$89.99",
            "https://example.com/lamp",
            photo::LAMP,
            "Sleek modern table lamp with adjustable brightness",
            "IKEA",
            product::Category::LIGHTING,
        ),
        product(
            "2",
            "Decorative Throw Pillows",
            "$34.99",
            "https://example.com/pillows",
            photo::PILLOW,
            "Set of 2 geometric pattern throw pillows",
            "West Elm",
            product::Category::DECOR,
        ),
        product(
            "3",
            "Area Rug",
            "$199.99",
            "https://example.com/rug",
            photo::RUG,
            "Modern geometric area rug, 5x7 feet",
            "Rugs USA",
            product::Category::DECOR,
        ),
        product(
            "4",
            "Wall Art Set",
            "$149.99",
            "https://example.com/wall-art",
            photo::ART,
            "Abstract wall art set of 3 prints",
            "Etsy",
            product::Category::DECOR,
        ),
    ]
}

/// Returns a canned [`Product`] matching the keywords of the provided
/// [`Query`].
#[must_use]
pub fn products_for(query: &Query) -> Vec<Product> {
    let item = if query.mentions(&["lamp", "lighting"]) {
        product(
            "mock-lamp-1",
            "Modern Table Lamp",
            "$89.99",
            "https://www.ikea.com/us/en/p/fado-table-lamp-white-10096372/",
            photo::LAMP,
            "Sleek modern table lamp with soft lighting",
            "IKEA",
            product::Category::LIGHTING,
        )
    } else if query.mentions(&["pillow", "cushion"]) {
        product(
            "mock-pillow-1",
            "Decorative Throw Pillows",
            "$34.99",
            "https://www.westelm.com/products/outdoor-pillow-covers-b2956/",
            photo::PILLOW,
            "Set of 2 geometric pattern throw pillows",
            "West Elm",
            product::Category::DECOR,
        )
    } else if query.mentions(&["rug"]) {
        product(
            "mock-rug-1",
            "Modern Area Rug",
            "$199.99",
            "https://www.wayfair.com/rugs/pdp/loloi-margot-area-rug-w002642456.html",
            photo::RUG,
            "Modern geometric area rug, 5x7 feet",
            "Loloi",
            product::Category::DECOR,
        )
    } else {
        product(
            "mock-general-1",
            "Home Decor Item",
            "$49.99",
            "https://www.target.com/c/home-decor/",
            photo::DEFAULT,
            "Beautiful home decor piece",
            "Target",
            product::Category::DECOR,
        )
    };
    vec![item]
}

/// Builds a static [`Product`].
#[expect(clippy::too_many_arguments, reason = "still readable")]
fn product(
    id: &'static str,
    title: &'static str,
    price: &str,
    url: &str,
    photo: &str,
    description: &str,
    brand: &str,
    category: &str,
) -> Product {
    #[expect(unsafe_code, reason = "static literals are never empty")]
    let (id, title) = unsafe {
        (
            product::Id::new_unchecked(id),
            product::Title::new_unchecked(title),
        )
    };
    Product {
        id,
        title,
        price: product::Price::new(price),
        url: Url::new(url),
        image_url: Url::new(format!(
            "https://images.unsplash.com/{photo}?w=300&h=300&fit=crop",
        )),
        description: Some(description.to_owned()),
        brand: Some(brand.to_owned()),
        category: Some(product::Category::new(category)),
    }
}

#[cfg(test)]
mod spec {
    use super::{products, products_for, room_analysis};
    use crate::domain::{room::Size, search::Query};

    fn ids_for(query: &str) -> Vec<String> {
        products_for(&Query::new(query))
            .into_iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn analyzes_medium_modern_living_room() {
        let room = room_analysis();

        assert_eq!(room.room_type, "living room");
        assert_eq!(room.size, Size::Medium);
        assert_eq!(room.recommendations.len(), 5);
    }

    #[test]
    fn recommends_four_distinct_products() {
        let products = products();

        assert_eq!(products.len(), 4);
        assert_eq!(products[0].category.as_ref().unwrap().to_string(), "lighting");
        assert_eq!(
            products[3].image_url.to_string(),
            "https://images.unsplash.com/photo-1541961017774-22349e4a1262\
             ?w=300&h=300&fit=crop",
        );
    }

    #[test]
    fn matches_query_keywords() {
        assert_eq!(ids_for("modern lighting fixtures"), ["mock-lamp-1"]);
        assert_eq!(ids_for("table lamps for living room"), ["mock-lamp-1"]);
        assert_eq!(ids_for("Include throw pillows"), ["mock-pillow-1"]);
        assert_eq!(ids_for("area rug for bedroom"), ["mock-rug-1"]);
        assert_eq!(ids_for("modern living room furniture"), ["mock-general-1"]);
    }

    #[test]
    fn matches_query_keywords_case_sensitively() {
        assert_eq!(ids_for("Lamp"), ["mock-general-1"]);
    }
}
