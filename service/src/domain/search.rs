//! Product search [`Query`] definitions.

use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::RoomAnalysis;

/// Free-text query to a product search.
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
pub struct Query(String);

impl Query {
    /// Creates a new [`Query`].
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    /// Indicates whether this [`Query`] contains nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Derives the [`Query`]s to search furnishing products for the analyzed
    /// room with.
    ///
    /// Three generic queries built from the room style and type go first,
    /// followed by the first `recommendations` of the [`RoomAnalysis`]
    /// stripped of any punctuation.
    #[must_use]
    pub fn for_room(room: &RoomAnalysis, recommendations: usize) -> Vec<Self> {
        let RoomAnalysis {
            room_type, style, ..
        } = room;

        [
            format!("{style} {room_type} furniture"),
            format!("{room_type} decor accessories"),
            format!("{style} lighting fixtures"),
        ]
        .into_iter()
        .chain(room.recommendations.iter().take(recommendations).map(|rec| {
            let rec = rec
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
                .collect::<String>();
            format!("{rec} for {room_type}")
        }))
        .map(Self)
        .collect()
    }

    /// Indicates whether this [`Query`] contains any of the provided
    /// `keywords`.
    ///
    /// Matching is case-sensitive.
    #[must_use]
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.0.contains(k))
    }
}

#[cfg(test)]
mod spec {
    use super::Query;
    use crate::domain::{room::Size, RoomAnalysis};

    fn room() -> RoomAnalysis {
        RoomAnalysis {
            room_type: "living room".to_owned(),
            style: "modern".to_owned(),
            colors: vec!["white".to_owned()],
            lighting: "natural".to_owned(),
            size: Size::Medium,
            existing_furniture: vec!["sofa".to_owned()],
            recommendations: vec![
                "Add accent lighting with table lamps".to_owned(),
                "Include throw pillows (for color)!".to_owned(),
                "Consider a area rug to define the space".to_owned(),
            ],
        }
    }

    #[test]
    fn derives_queries_for_room() {
        let queries = Query::for_room(&room(), 2)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        assert_eq!(
            queries,
            [
                "modern living room furniture",
                "living room decor accessories",
                "modern lighting fixtures",
                "Add accent lighting with table lamps for living room",
                "Include throw pillows for color for living room",
            ],
        );
    }

    #[test]
    fn derives_only_base_queries_without_recommendations() {
        let mut room = room();
        room.recommendations.clear();

        assert_eq!(Query::for_room(&room, 2).len(), 3);
        assert_eq!(Query::for_room(&self::room(), 0).len(), 3);
    }

    #[test]
    fn mentions_case_sensitively() {
        let query = Query::new("modern lighting fixtures");

        assert!(query.mentions(&["lamp", "lighting"]));
        assert!(!query.mentions(&["Lighting"]));
    }

    #[test]
    fn detects_blank_queries() {
        assert!(Query::new("").is_blank());
        assert!(Query::new(" \t").is_blank());
        assert!(!Query::new(" rug ").is_blank());
    }
}
