/// Configuration could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "environment variable {} must be set", key),
            Self::Invalid { key, value } => write!(
                f,
                "invalid value {:?} for --{} / {}",
                value,
                key.to_lowercase(),
                key
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
