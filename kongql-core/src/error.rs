use thiserror::Error;

/// Unified error type for kongql.
///
/// Nothing here is caught or translated inside the façade: every variant
/// propagates to the query-execution engine, which surfaces it as a
/// field-level error without aborting sibling fields.
#[derive(Error, Debug)]
pub enum KongqlError {
    #[error("transport failure for {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Admin API returned {status} for {path}")]
    UpstreamStatus { status: u16, path: String },

    #[error("malformed Admin API body for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Admin API base URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{entity}.{field} reference is missing or has no id")]
    MissingReference {
        entity: &'static str,
        field: &'static str,
    },

    #[error("entity matches no known kind")]
    Unclassified,

    #[error("config error: {0}")]
    Config(#[from] figment::Error),
}
