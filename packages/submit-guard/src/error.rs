use thiserror::Error;

/// Why a [`GuardConfig`](crate::GuardConfig) could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document was malformed or had fields of the wrong type.
    #[error("failed to parse guard config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The button id was empty.
    #[error("button-id must not be empty")]
    EmptyButtonId,

    /// The processing label was empty.
    #[error("processing-label must not be empty")]
    EmptyLabel,
}
