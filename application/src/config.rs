//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::Debug;
use secrecy::SecretString;
use serde::Deserialize;
use service::{infra::search::exa, layout::Randomness};
use smart_default::SmartDefault;

/// Environment variable overriding [`Exa::api_key`].
pub const EXA_API_KEY: &str = "EXA_API_KEY";

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: Server,

    /// Room analysis configuration.
    #[serde(default)]
    pub analysis: Analysis,

    /// Product search configuration.
    #[serde(default)]
    pub search: Search,

    /// Product placement configuration.
    #[serde(default)]
    pub placement: Placement,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - taking [`Exa::api_key`] from the [`EXA_API_KEY`] environment
    ///   variable (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .set_override_option(
                "search.exa.api_key",
                std::env::var(EXA_API_KEY).ok(),
            )?
            .build()?
            .try_deserialize()
    }

    /// Returns [`service::Config`] described by this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        let Search {
            max_products,
            recommendation_queries,
            ..
        } = self.search;

        service::Config {
            max_products,
            recommendation_queries,
            randomness: self.placement.into(),
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Room analysis configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Analysis {
    /// Delay imitating a round trip to a vision API.
    #[default(time::Duration::from_secs(2))]
    #[serde(with = "humantime_serde")]
    pub delay: time::Duration,
}

/// Product search configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Search {
    /// Maximum number of recommended products.
    #[default(8)]
    pub max_products: usize,

    /// Number of room recommendations turned into search queries.
    #[default(2)]
    pub recommendation_queries: usize,

    /// [Exa] configuration.
    ///
    /// [Exa]: https://exa.ai
    pub exa: Exa,
}

/// [Exa] configuration.
///
/// [Exa]: https://exa.ai
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Exa {
    /// Endpoint of the search API.
    #[default("https://api.exa.ai/search".to_owned())]
    pub endpoint: String,

    /// API key to authorize with.
    ///
    /// Mock search is used if [`None`].
    #[debug("{}", api_key.as_ref().map_or("None", |_| "Some(***)"))]
    pub api_key: Option<String>,

    /// Number of results requested per query.
    #[default(5)]
    pub num_results: u8,

    /// Timeout of a single search request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl Exa {
    /// Returns [`exa::Config`] described by this [`Exa`] configuration, if
    /// its [`Exa::api_key`] is present.
    #[must_use]
    pub fn to_config(&self) -> Option<exa::Config> {
        let Self {
            endpoint,
            api_key,
            num_results,
            timeout,
        } = self;

        api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| exa::Config {
                endpoint: endpoint.clone(),
                api_key: SecretString::from(key.clone()),
                num_results: *num_results,
                timeout: *timeout,
            })
    }
}

/// Product placement configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Source of randomness.
    pub mode: PlacementMode,

    /// Seed of [`PlacementMode::Seeded`] and salt of
    /// [`PlacementMode::Keyed`].
    pub seed: u64,
}

/// Source of randomness for product placement.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Fresh randomness on every request.
    #[default]
    Entropy,

    /// Single generator seeded with [`Placement::seed`].
    Seeded,

    /// Generator per product, salted with [`Placement::seed`].
    Keyed,
}

impl From<Placement> for Randomness {
    fn from(value: Placement) -> Self {
        let Placement { mode, seed } = value;
        match mode {
            PlacementMode::Entropy => Self::Entropy,
            PlacementMode::Seeded => Self::Seeded(seed),
            PlacementMode::Keyed => Self::Keyed(seed),
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
