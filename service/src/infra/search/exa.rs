//! [Exa] neural search [`SearchEngine`].
//!
//! [Exa]: https://exa.ai

use std::{
    sync::{Arc, LazyLock},
    time::{self, Duration, SystemTime},
};

use common::operations::Search;
use derive_more::{Debug, Display, Error as StdError, From};
use regex::Regex;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{product, search::Query, Product, Url},
    fallback::photo,
};

use super::SearchEngine;

/// Shops the [`Product`]s are searched at.
pub const SHOPS: &[&str] = &[
    "ikea.com",
    "wayfair.com",
    "westelm.com",
    "target.com",
    "amazon.com",
    "overstock.com",
    "crateandbarrel.com",
];

/// Suffix narrowing every [`Query`] down to purchasable items.
const QUERY_SUFFIX: &str = "buy online furniture home decor";

/// Price mentioned in a page text, like `$1,299.99`.
static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$[0-9,]+\.?[0-9]*").expect("valid price regex")
});

/// [`Exa`] configuration.
#[derive(Debug)]
pub struct Config {
    /// Endpoint of the search API.
    pub endpoint: String,

    /// API key to authorize with.
    pub api_key: SecretString,

    /// Number of results requested per [`Query`].
    pub num_results: u8,

    /// Timeout of a single search request.
    pub timeout: Duration,
}

/// [Exa] neural search client.
///
/// [Exa]: https://exa.ai
#[derive(Clone, Debug)]
pub struct Exa {
    /// HTTP client performing requests.
    #[debug(skip)]
    client: reqwest::Client,

    /// [`Config`] of this [`Exa`] client.
    config: Arc<Config>,
}

impl Exa {
    /// Creates a new [`Exa`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to build an HTTP client.
    pub fn new(config: Config) -> Result<Self, Traced<super::Error>> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}

impl SearchEngine<Search<Query>> for Exa {
    type Ok = Vec<Product>;
    type Err = Traced<super::Error>;

    async fn execute(
        &self,
        Search(query): Search<Query>,
    ) -> Result<Self::Ok, Self::Err> {
        let Config {
            endpoint,
            api_key,
            num_results,
            ..
        } = &*self.config;

        let resp = self
            .client
            .post(endpoint)
            .header("x-api-key", api_key.expose_secret())
            .json(&Request::new(&query, *num_results))
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::map_from(tracerr::new!(Error::Status(status))));
        }

        let Response {
            results,
            autoprompt_string,
        } = resp
            .json()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        log::debug!(
            "`Exa` found {} results for `{query}` (autoprompt: {:?})",
            results.len(),
            autoprompt_string,
        );

        let stamp = SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Ok(into_products(&query, results, stamp))
    }
}

/// Converts raw search [`Hit`]s into priced [`Product`]s.
///
/// [`Hit`]s without a title or without a price in their text are skipped.
fn into_products(query: &Query, hits: Vec<Hit>, stamp: u128) -> Vec<Product> {
    let image_url = thumbnail_for(query);
    let category = categorize(query);

    hits.into_iter()
        .enumerate()
        .filter_map(|(i, hit)| {
            let Hit {
                title,
                url,
                text,
                highlights,
            } = hit;

            let Some(title) = title.and_then(product::Title::new) else {
                log::debug!("skipping untitled `Exa` result `{url}`");
                return None;
            };
            let price = product::Price::new(
                PRICE
                    .find(&text)
                    .map_or(product::Price::UNKNOWN, |m| m.as_str()),
            );
            if price.is_unknown() {
                return None;
            }
            let description = highlights
                .into_iter()
                .flatten()
                .next()
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| {
                    format!("{}...", text.chars().take(100).collect::<String>())
                });

            #[expect(unsafe_code, reason = "never empty")]
            let id =
                unsafe { product::Id::new_unchecked(format!("exa-{i}-{stamp}")) };
            Some(Product {
                id,
                title,
                price,
                url: Url::new(url),
                image_url: image_url.clone(),
                description: Some(description),
                brand: None,
                category: Some(category.clone()),
            })
        })
        .collect()
}

/// Picks a stock thumbnail matching the provided [`Query`].
fn thumbnail_for(query: &Query) -> Url {
    let query = query.to_string().to_lowercase();
    let photo = [
        ("lamp", photo::LAMP),
        ("pillow", photo::PILLOW),
        ("rug", photo::RUG),
        ("art", photo::ART),
        ("plant", photo::PLANT),
    ]
    .into_iter()
    .find_map(|(keyword, photo)| query.contains(keyword).then_some(photo))
    .unwrap_or(photo::DEFAULT);

    Url::new(format!(
        "https://images.unsplash.com/{photo}?w=300&h=300&fit=crop&auto=format",
    ))
}

/// Infers a [`product::Category`] of the [`Product`]s found by the provided
/// [`Query`].
fn categorize(query: &Query) -> product::Category {
    product::Category::new(if query.mentions(&["lamp", "light"]) {
        product::Category::LIGHTING
    } else if query.mentions(&["furniture"]) {
        product::Category::FURNITURE
    } else {
        product::Category::DECOR
    })
}

/// Search request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    /// Text of the query.
    query: String,

    /// Kind of the search.
    r#type: &'static str,

    /// Whether the query may be rewritten by the search engine.
    use_autoprompt: bool,

    /// Number of results to return.
    num_results: u8,

    /// Domains to search within.
    include_domains: &'static [&'static str],

    /// Page contents to return along with the results.
    contents: Contents,
}

impl Request {
    /// Creates a new neural search [`Request`] for the provided [`Query`].
    fn new(query: &Query, num_results: u8) -> Self {
        Self {
            query: format!("{query} {QUERY_SUFFIX}"),
            r#type: "neural",
            use_autoprompt: true,
            num_results,
            include_domains: SHOPS,
            contents: Contents {
                text: true,
                highlights: true,
            },
        }
    }
}

/// Page contents requested along with the results.
#[derive(Clone, Copy, Debug, Serialize)]
struct Contents {
    /// Whether to return the page text.
    text: bool,

    /// Whether to return the page highlights.
    highlights: bool,
}

/// Search response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    /// Found [`Hit`]s.
    results: Vec<Hit>,

    /// Query rewritten by the search engine, if any.
    #[serde(default)]
    autoprompt_string: Option<String>,
}

/// Single search result.
#[derive(Debug, Deserialize)]
struct Hit {
    /// Title of the found page.
    #[serde(default)]
    title: Option<String>,

    /// URL of the found page.
    url: String,

    /// Text of the found page.
    #[serde(default)]
    text: String,

    /// Highlighted fragments of the page text.
    #[serde(default)]
    highlights: Option<Vec<String>>,
}

/// [`Exa`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// HTTP request failed.
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),

    /// Search API responded with an unsuccessful status.
    #[display("unexpected response status: {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] reqwest::StatusCode),
}

#[cfg(test)]
mod spec {
    use super::{categorize, into_products, thumbnail_for, Hit, Request, Response};
    use crate::domain::{product, search::Query};

    fn hit(title: Option<&str>, url: &str, text: &str) -> Hit {
        Hit {
            title: title.map(ToOwned::to_owned),
            url: url.to_owned(),
            text: text.to_owned(),
            highlights: None,
        }
    }

    #[test]
    fn serializes_request() {
        let req = Request::new(&Query::new("modern lighting fixtures"), 5);

        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json["query"],
            "modern lighting fixtures buy online furniture home decor",
        );
        assert_eq!(json["type"], "neural");
        assert_eq!(json["useAutoprompt"], true);
        assert_eq!(json["numResults"], 5);
        assert_eq!(json["includeDomains"].as_array().unwrap().len(), 7);
        assert_eq!(json["contents"]["highlights"], true);
    }

    #[test]
    fn deserializes_response() {
        let json = r#"{
            "results": [{
                "title": "FADO Table lamp",
                "url": "https://www.ikea.com/fado",
                "text": "Only $24.99 today",
                "highlights": ["Soft mood light"],
                "publishedDate": "2024-01-01"
            }],
            "autopromptString": "table lamps"
        }"#;

        let resp = serde_json::from_str::<Response>(json).unwrap();

        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.autoprompt_string.as_deref(), Some("table lamps"));
        assert_eq!(
            resp.results[0].highlights.as_deref(),
            Some(&["Soft mood light".to_owned()][..]),
        );
    }

    #[test]
    fn extracts_first_price() {
        let products = into_products(
            &Query::new("modern lighting fixtures"),
            vec![hit(
                Some("Arc Floor Lamp"),
                "https://www.wayfair.com/arc",
                "Was $1,299.99, now $999",
            )],
            1,
        );

        assert_eq!(products[0].price, product::Price::new("$1,299.99"));
    }

    #[test]
    fn extracts_only_ascii_digit_prices() {
        let products = into_products(
            &Query::new("modern lighting fixtures"),
            vec![
                hit(
                    Some("Arc Floor Lamp"),
                    "https://www.wayfair.com/arc",
                    "Was $\u{0661}\u{0662}\u{0663}, now $45.50",
                ),
                hit(
                    Some("Desk Lamp"),
                    "https://www.ikea.com/desk",
                    "Only $\u{0665}\u{0660}",
                ),
            ],
            1,
        );

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, product::Price::new("$45.50"));
    }

    #[test]
    fn skips_unpriced_and_untitled_hits() {
        let products = into_products(
            &Query::new("living room decor accessories"),
            vec![
                hit(Some("No price"), "https://a.com", "Call us"),
                hit(None, "https://b.com", "$10"),
                hit(Some(""), "https://c.com", "$10"),
                hit(Some("Vase"), "https://d.com", "$15.50"),
            ],
            1_700_000_000_000,
        );

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.to_string(), "exa-3-1700000000000");
        assert_eq!(products[0].title.to_string(), "Vase");
    }

    #[test]
    fn describes_by_highlight_or_truncated_text() {
        let long = format!("$5 {}", "x".repeat(200));
        let mut highlighted = hit(Some("A"), "https://a.com", &long);
        highlighted.highlights = Some(vec!["Great pick".to_owned()]);
        let mut blank = hit(Some("B"), "https://b.com", &long);
        blank.highlights = Some(vec![String::new()]);

        let products = into_products(
            &Query::new("decor"),
            vec![highlighted, blank, hit(Some("C"), "https://c.com", "$5 short")],
            1,
        );

        assert_eq!(products[0].description.as_deref(), Some("Great pick"));
        let truncated = products[1].description.as_deref().unwrap();
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
        assert_eq!(products[2].description.as_deref(), Some("$5 short..."));
    }

    #[test]
    fn picks_thumbnail_by_first_keyword() {
        assert!(thumbnail_for(&Query::new("Modern RUG with art"))
            .to_string()
            .contains("photo-1506439773649-6e0eb8cfb237"));
        assert!(thumbnail_for(&Query::new("smart lamp"))
            .to_string()
            .contains("photo-1507003211169-0a1dd7228f2d"));
        assert_eq!(
            thumbnail_for(&Query::new("sofa")).to_string(),
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7\
             ?w=300&h=300&fit=crop&auto=format",
        );
    }

    #[test]
    fn categorizes_by_query() {
        assert_eq!(
            categorize(&Query::new("modern lighting fixtures")).to_string(),
            "lighting",
        );
        assert_eq!(
            categorize(&Query::new("modern living room furniture")).to_string(),
            "furniture",
        );
        assert_eq!(
            categorize(&Query::new("living room decor accessories")).to_string(),
            "decor",
        );
    }
}
