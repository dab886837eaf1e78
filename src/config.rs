//! Runtime settings, read from `BOOKSHELF_*` environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde_derive::Deserialize;

/// Page served for a GET without a query.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Ide {
    Graphiql,
    Playground,
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// URL the IDE page sends queries to.
    pub graphql_endpoint: String,
    pub ide: Ide,
    /// Tracing filter directive, used when `RUST_LOG` is not set.
    pub log: String,
    /// JSON book list replacing the built-in seed data.
    pub seed_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphql_endpoint: "/graphql".into(),
            ide: Ide::Playground,
            log: "info".into(),
            seed_file: None,
        }
    }
}

impl Settings {
    pub const ENV_PREFIX: &'static str = "BOOKSHELF";

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_config(
            Config::builder()
                .add_source(Environment::with_prefix(Self::ENV_PREFIX))
                .build()?,
        )
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }
}
